#[allow(non_snake_case)]
#[cfg(test)]
mod run_tests {
    use crate::amounts::{Amount, Locale};
    use crate::cli::{run, CheckoutOptions};
    use crate::errors::RoundupError;
    use crate::nonprofits::Catalog;
    use crate::session::DonationSession;
    use crate::vault::CONFIG_FILE;
    use clap::Parser;
    use std::fs;

    fn options(arguments: &[&str]) -> CheckoutOptions {
        CheckoutOptions::try_parse_from(["roundup"].iter().chain(arguments.iter()))
            .expect("Arguments are valid")
    }

    struct NoListener;

    impl crate::session::DonationListener for NoListener {
        fn on_amount_chosen(&mut self, _amount: Amount) {}
    }

    #[test]
    fn list__category_filter() {
        let screen = run(options(&["--list", "--category", "animals"])).unwrap();
        assert!(screen.contains("espi"));
        assert!(screen.contains("ariel"));
        assert!(!screen.contains("arsis"));
    }

    #[test]
    fn list__no_match() {
        let screen = run(options(&["--list", "--search", "zzz"])).unwrap();
        assert_eq!(screen, "No nonprofit matches\n");
    }

    #[test]
    fn search__requires_list() {
        assert!(CheckoutOptions::try_parse_from(["roundup", "--search", "kids"]).is_err())
    }

    #[test]
    fn pick_and_custom__conflict() {
        assert!(
            CheckoutOptions::try_parse_from(["roundup", "--pick", "0", "--custom", "1"]).is_err()
        )
    }

    #[test]
    fn count__negative_accepted_and_clamped() {
        let screen = run(options(&["--seed", "4", "--count", "-2"])).unwrap();
        assert!(screen.contains("Preset amounts"));
    }

    #[test]
    fn order_total__negative__rejected() {
        assert!(CheckoutOptions::try_parse_from(["roundup", "--order-total", "-5"]).is_err())
    }

    #[test]
    fn custom_amount__added_to_total() {
        let screen = run(options(&[
            "--seed",
            "1",
            "--order-total",
            "11.00",
            "--custom",
            "7,50",
            "--locale",
            "german",
        ]))
        .unwrap();
        assert!(screen.contains("Custom amount: 7,50 €"));
        assert!(screen.contains("11,00 €"));
        assert!(screen.contains("18,50 €"));
    }

    #[test]
    fn default_amount__same_as_session_with_same_seed() {
        let mut session = DonationSession::seeded(21, Catalog::default(), 3);
        let expected = session
            .select_nonprofit("arsis", &mut NoListener)
            .unwrap()
            .default_amount()
            .unwrap();
        let total = Amount::from_cents(14999) + expected;

        let screen = run(options(&["--seed", "21", "--nonprofit", "arsis"])).unwrap();
        assert!(screen.contains("Donation to: ΑΡΣΙΣ"));
        assert!(screen.contains(&total.format(Locale::Greek)));
    }

    #[test]
    fn pick__out_of_range() {
        assert!(matches!(
            run(options(&["--seed", "1", "--pick", "7"])),
            Err(RoundupError::PresetOutOfRange { index: 7, .. })
        ))
    }

    #[test]
    fn nonprofit__unknown() {
        assert!(matches!(
            run(options(&["--nonprofit", "nope"])),
            Err(RoundupError::UnknownNonprofit(_))
        ))
    }

    #[test]
    fn vault__catalog_and_checkout_values() {
        let directory = tempfile::tempdir().expect("Can create a temporary directory");
        fs::write(
            directory.path().join(CONFIG_FILE),
            r#"{
                "nonprofits": [
                    {"id": "trees", "name": "Trees for all", "description": "Plants trees", "category": "environment"}
                ],
                "checkout": {"order_total": "20.00", "locale": "plain", "default_nonprofit": "trees"}
            }"#,
        )
        .expect("Can write the config");
        let vault = directory.path().to_str().expect("Temporary path is UTF-8");

        let screen = run(options(&["--vault", vault, "--seed", "2", "--custom", "1"])).unwrap();
        assert!(screen.contains("Donation to: Trees for all"));
        assert!(screen.contains("21.00 €"));
    }

    #[test]
    fn vault__missing_config() {
        let directory = tempfile::tempdir().expect("Can create a temporary directory");
        let vault = directory.path().to_str().expect("Temporary path is UTF-8");
        assert!(matches!(
            run(options(&["--vault", vault])),
            Err(RoundupError::Io(_))
        ))
    }
}
