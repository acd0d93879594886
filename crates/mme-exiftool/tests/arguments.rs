//! Tag values reach the tool exactly as they appear in the table.

use std::path::Path;

use mme_exiftool::{ExifTool, prettify_status, tag_assignment};
use mme_model::Standard;
use proptest::prelude::*;

proptest! {
    #[test]
    fn assignment_keeps_value_verbatim(tag in "[A-Za-z:-]{1,24}", value in "\\PC*") {
        let arg = tag_assignment(&tag, &value);
        let expected_prefix = format!("-{tag}=");
        prop_assert!(arg.starts_with(&expected_prefix));
        prop_assert_eq!(&arg[expected_prefix.len()..], value.as_str());
    }

    #[test]
    fn write_args_end_with_assignment_and_path(value in "[ -~]*") {
        let tool = ExifTool::default();
        let args = tool.write_args(Standard::Dc, "dc:title", &value, Path::new("a.jpg"));
        let n = args.len();
        prop_assert_eq!(args[n - 2].to_string_lossy().into_owned(), format!("-dc:title={value}"));
        prop_assert_eq!(args[n - 1].to_string_lossy().into_owned(), "a.jpg".to_string());
    }

    #[test]
    fn prettify_leaves_other_text_alone(text in "[a-z0-9 |.]*") {
        prop_assert_eq!(prettify_status(&text), text);
    }
}
