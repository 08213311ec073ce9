/// Extension of generated documents.
pub const OUTPUT_EXTENSION: &str = ".rst";

/// Flatten a source location into a single output file name.
///
/// Segments are joined with `.`. Without an extension the bare joined name
/// is returned; otherwise `-toc` (directories) or `-file` (files) is added
/// before the extension.
///
/// # Example
///
/// ```
/// use gherkindoc_tree::flat_name;
///
/// assert_eq!(flat_name(&["a", "b"], Some("c"), false, Some(".rst")), "a.b.c-file.rst");
/// assert_eq!(flat_name(&["a", "b"], Some("c"), false, None), "a.b.c");
/// assert_eq!(flat_name(&["a", "b"], None, true, Some(".rst")), "a.b-toc.rst");
/// ```
pub fn flat_name<S: AsRef<str>>(
    path_list: &[S],
    filename_root: Option<&str>,
    is_dir: bool,
    ext: Option<&str>,
) -> String {
    let mut segments: Vec<&str> = path_list.iter().map(AsRef::as_ref).collect();
    if let Some(root) = filename_root {
        segments.push(root);
    }
    let name = segments.join(".");
    match ext {
        None => name,
        Some(ext) => {
            let marker = if is_dir { "-toc" } else { "-file" };
            format!("{name}{marker}{ext}")
        }
    }
}
