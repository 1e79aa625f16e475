use crate::amounts::Locale;
use crate::checkout::CheckoutSummary;
use crate::nonprofits::Nonprofit;
use crate::session::Selection;
use comfy_table::Table;

pub fn format_checkout_screen(
    selection: &Selection,
    summary: &CheckoutSummary,
    locale: Locale,
) -> String {
    let mut components = vec![title(&format!(
        "Donation to: {}",
        selection.nonprofit.name
    ))];

    let mut presets = Table::new();
    presets.set_header(vec!["#", "Amount", "Default", "Chosen"]);
    for (index, amount) in selection.presets.iter().enumerate() {
        presets.add_row(vec![
            index.to_string(),
            amount.format(locale),
            mark(index == selection.default_index),
            mark(selection.chosen == Some(*amount)),
        ]);
    }
    components.push(format!("{}\n{}", title("Preset amounts"), presets));

    if let Some(custom) = selection
        .chosen
        .filter(|chosen| !selection.presets.contains(chosen))
    {
        components.push(format!("Custom amount: {}", custom.format(locale)));
    }

    let mut totals = Table::new();
    totals.set_header(vec!["Order", "Donation", "Total"]);
    totals.add_row(vec![
        summary.order_total().format(locale),
        summary.donation().format(locale),
        summary.total().format(locale),
    ]);
    components.push(format!("{}\n{}", title("Summary"), totals));

    components.push(format!("Release: {}", env!("RELEASE")));

    components.join("\n\n") + "\n"
}

pub fn format_nonprofits(nonprofits: &[&Nonprofit]) -> String {
    if nonprofits.is_empty() {
        return "No nonprofit matches\n".to_string();
    }

    let mut table = Table::new();
    table.set_header(vec!["Id", "Name", "Category"]);
    for nonprofit in nonprofits {
        table.add_row(vec![
            nonprofit.id.as_str(),
            nonprofit.name.as_str(),
            nonprofit.category.as_str(),
        ]);
    }

    format!("{}\n{}\n", title("Nonprofits"), table)
}

fn mark(marked: bool) -> String {
    (if marked { "✅" } else { "" }).into()
}

fn title(string: &str) -> String {
    let string_length = string.chars().count();
    string.to_string() + "\n" + &"=".repeat(string_length)
}
