use crate::range::DateRange;

/// Generate a filename for the weekend export based on the selected range
pub fn generate_filename(range: &DateRange) -> String {
    let [from, to] = range.iso();
    format!(
        "weekends_{}_{}.csv",
        from.unwrap_or_else(|| "open".to_string()),
        to.unwrap_or_else(|| "open".to_string())
    )
}

/// Save exported content to a file
pub async fn save_file(filename: String, content: String) -> Result<(), String> {
    tokio::fs::write(&filename, content)
        .await
        .map_err(|e| format!("Failed to write {filename}: {e}"))
}
