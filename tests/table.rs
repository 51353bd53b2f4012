use metanet_tools::table::parse_table;
use metanet_tools::BrowseError;

const EDITOR: &str = r#"
<html><body>
<table class="table table-dns-editor">
  <thead><tr><th>Name</th><th>TTL</th><th>Typ</th><th>Wert</th></tr></thead>
  <tbody>
    <tr>
      <th> example.com </th>
      <td>3600</td>
      <td> TXT </td>
      <td>"v=spf1 mx -all"</td>
      <td><a class="edit" href="/edit/1">Bearbeiten</a><a class="delete" href="/dns/delete/1">Löschen</a></td>
    </tr>
    <tr>
      <th>example.com</th>
      <td>3600</td>
      <td>MX</td>
      <td>10 mail.example.com</td>
      <td></td>
    </tr>
    <tr>
      <th>_acme-challenge.example.com</th>
      <td>60</td>
      <td>TXT</td>
      <td>
        "abc"
      </td>
    </tr>
  </tbody>
</table>
</body></html>
"#;

#[test]
fn header_and_short_rows_are_skipped() {
    let rows = parse_table(EDITOR, "table-dns-editor", "delete").unwrap();
    assert_eq!(rows.len(), 3);
}

#[test]
fn cells_are_trimmed_and_unquoted() {
    let rows = parse_table(EDITOR, "table-dns-editor", "delete").unwrap();
    assert_eq!(rows[0].key, "example.com");
    assert_eq!(rows[0].kind, "TXT");
    assert_eq!(rows[0].value, "v=spf1 mx -all");
    assert_eq!(rows[2].value, "abc");
}

#[test]
fn delete_link_only_from_delete_anchor() {
    let rows = parse_table(EDITOR, "table-dns-editor", "delete").unwrap();
    assert_eq!(rows[0].delete_href.as_deref(), Some("/dns/delete/1"));
    assert_eq!(rows[1].delete_href, None);
    assert_eq!(rows[2].delete_href, None);
}

#[test]
fn missing_table_is_an_error() {
    let err = parse_table("<table class=\"other\"></table>", "table-dns-editor", "delete")
        .unwrap_err();
    assert!(matches!(err, BrowseError::TableNotFound(c) if c == "table-dns-editor"));
}
