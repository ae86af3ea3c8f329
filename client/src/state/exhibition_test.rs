use super::*;

fn item(first: Option<&str>, last: Option<&str>, id: Option<i64>) -> ExhibitionItem {
    ExhibitionItem {
        id: "u1".to_owned(),
        uploader_first_name: first.map(str::to_owned),
        uploader_last_name: last.map(str::to_owned),
        external_employee_id: id,
        ..ExhibitionItem::default()
    }
}

#[test]
fn uploader_name_formats() {
    assert_eq!(uploader_name(&item(Some("Ada"), Some("Lovelace"), Some(3))), "Ada Lovelace (ID: 3)");
    assert_eq!(uploader_name(&item(None, Some("Lovelace"), None)), "Lovelace");
    assert_eq!(uploader_name(&item(None, None, Some(3))), "Unknown Uploader (ID: 3)");
}

#[test]
fn file_urls_resolve_against_backend() {
    let base = "http://localhost:8089";
    assert_eq!(resolve_file_url("https://x.test/a.pdf", base).as_deref(), Some("https://x.test/a.pdf"));
    assert_eq!(resolve_file_url("www.x.test", base).as_deref(), Some("https://www.x.test"));
    assert_eq!(resolve_file_url("/files/a.pdf", base).as_deref(), Some("http://localhost:8089/files/a.pdf"));
    assert_eq!(resolve_file_url("files/a.pdf", base).as_deref(), Some("http://localhost:8089/files/a.pdf"));
    assert_eq!(resolve_file_url("  ", base), None);
}

#[test]
fn rating_must_be_one_to_five() {
    assert_eq!(parse_rating("5"), Ok(5));
    assert!(parse_rating("0").is_err());
    assert!(parse_rating("6").is_err());
    assert!(parse_rating("").is_err());
}

#[test]
fn comment_must_not_be_blank() {
    assert_eq!(parse_comment(" nice "), Ok("nice".to_owned()));
    assert_eq!(parse_comment(" "), Err("Comment cannot be empty.".to_owned()));
}

#[test]
fn employee_id_filter_must_be_numeric() {
    let query = ExhibitionQuery { kind: FilterKind::EmployeeId, value: "abc".to_owned() };
    assert!(query.to_filter().is_err());
    let query = ExhibitionQuery { kind: FilterKind::EmployeeId, value: " 42 ".to_owned() };
    assert_eq!(query.to_filter(), Ok(Some(ExhibitionFilter::EmployeeId(42))));
}

#[test]
fn blank_or_unset_filter_lists_everything() {
    assert_eq!(ExhibitionQuery::default().to_filter(), Ok(None));
    let query = ExhibitionQuery { kind: FilterKind::FirstName, value: "  ".to_owned() };
    assert_eq!(query.to_filter(), Ok(None));
}
