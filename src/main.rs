use roundup::cli::checkout_preview;
use roundup::logging::init_tracing;

fn main() {
    init_tracing();
    checkout_preview()
}
