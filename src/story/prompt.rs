/// Pages requested from the model unless configured otherwise.
pub const DEFAULT_PAGE_COUNT: usize = 6;

const PAGE_DELIMITER: &str = "\n\n";

/// Instruction sent to the text-generation service for one outline.
pub fn build_prompt(outline: &str, page_count: usize) -> String {
    format!(
        "You are a creative children's story writer. Create a short story based on the \
         following outline, divided into {page_count} pages. Each page should be a short \
         paragraph suitable for generating a cartoon image: {outline}"
    )
}

/// Split raw model output into page texts on blank lines, dropping
/// whitespace-only candidates. Kept pages are not trimmed.
pub fn split_pages(raw: &str) -> Vec<String> {
    raw.split(PAGE_DELIMITER)
        .filter(|page| !page.trim().is_empty())
        .map(str::to_string)
        .collect()
}
