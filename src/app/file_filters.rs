/// Filters offered by the Open dialog.
///
/// FLTK format: "Description\tPattern\nDescription2\tPattern2"
pub fn open_files_filter() -> String {
    ["All Files\t*.*", "Text Files\t*.txt"].join("\n")
}

/// Filters offered by the Save dialog; plain text comes first.
pub fn save_files_filter() -> String {
    ["Text Files\t*.txt", "All Files\t*.*"].join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_filter_lists_all_files_first() {
        let filter = open_files_filter();
        assert_eq!(filter, "All Files\t*.*\nText Files\t*.txt");
    }

    #[test]
    fn test_save_filter_lists_text_first() {
        let filter = save_files_filter();
        assert!(filter.starts_with("Text Files\t*.txt"));
        assert_eq!(filter.lines().count(), 2);
    }
}
