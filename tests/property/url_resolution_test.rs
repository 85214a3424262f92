//! Property-based tests for navigation target selection.
//!
//! Whatever valid URLs are configured, the resolver hands back exactly the
//! string for the chosen mode and never the other one.

use proptest::prelude::*;
use zync::services::url_resolver::{resolve_start_url, BuildMode};
use zync::types::settings::ContentSettings;

fn arb_mode() -> impl Strategy<Value = BuildMode> {
    prop_oneof![Just(BuildMode::Debug), Just(BuildMode::Release)]
}

fn arb_content() -> impl Strategy<Value = ContentSettings> {
    (1u16..=u16::MAX, "[a-z]{1,12}", "[a-z]{1,12}").prop_map(|(port, dir, page)| {
        ContentSettings {
            dev_url: format!("http://localhost:{}", port),
            bundled_url: format!("qrc:/{}/{}.html", dir, page),
            ..ContentSettings::default()
        }
    })
}

proptest! {
    #[test]
    fn resolved_target_is_configured_string(mode in arb_mode(), content in arb_content()) {
        let url = resolve_start_url(mode, &content).unwrap();
        let expected = match mode {
            BuildMode::Debug => &content.dev_url,
            BuildMode::Release => &content.bundled_url,
        };
        prop_assert_eq!(&url, expected);
    }
}
