use nutype::nutype;

/// File extension filter entry, stored without its leading dot.
///
/// `".PDF"`, `"pdf"` and `" pdf "` all become `PDF`/`pdf`; matching ignores
/// ASCII case, so the stored case does not matter.
#[nutype(
    sanitize(trim, with = |s: String| s.trim_start_matches('.').to_string()),
    validate(not_empty),
    derive(
        Debug,
        Clone,
        PartialEq,
        Eq,
        Hash,
        AsRef,
        Deref,
        TryFrom,
        Display,
        Serialize,
        Deserialize,
    )
)]
pub struct Extension(String);

impl Extension {
    /// True if the text after the last `.` of `file_name` equals this
    /// extension, ignoring ASCII case. Names without a dot never match.
    pub fn matches(&self, file_name: &str) -> bool {
        file_name
            .rsplit_once('.')
            .is_some_and(|(_, ext)| ext.eq_ignore_ascii_case(self.as_ref()))
    }
}

/// True if `file_name` passes the filter. An empty filter allows everything.
pub fn is_allowed(file_name: &str, extensions: &[Extension]) -> bool {
    extensions.is_empty() || extensions.iter().any(|ext| ext.matches(file_name))
}
