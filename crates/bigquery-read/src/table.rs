/// Map a table identifier into the `projects/<p>/datasets/<d>/tables/<t>`
/// resource name expected by the read service.
///
/// Resource names pass through unchanged, as do identifiers which aren't
/// of the `<project>.<dataset>.<table>` shorthand. The latter are left for
/// the service to reject. The shorthand is split from the right because
/// domain-scoped project IDs (`example.com:my-project`) may contain dots.
pub fn resource_name(table: &str) -> String {
    if table.starts_with("projects/") {
        return table.to_string();
    }

    let mut parts = table.rsplitn(3, '.');
    match (parts.next(), parts.next(), parts.next()) {
        (Some(table_id), Some(dataset), Some(project))
            if !table_id.is_empty() && !dataset.is_empty() && !project.is_empty() =>
        {
            format!("projects/{project}/datasets/{dataset}/tables/{table_id}")
        }
        _ => table.to_string(),
    }
}
