/// Join path segments with exactly one `/` between them.
///
/// A trailing slash on the base and leading/trailing slashes on the
/// segments are collapsed, so `url_join("/a/", &["/b/"])` gives `/a/b`.
pub(crate) fn url_join(base: &str, segments: &[&str]) -> String {
    let mut out = base.trim_end_matches('/').to_string();
    for segment in segments {
        let segment = segment.trim_matches('/');
        if segment.is_empty() {
            continue;
        }
        out.push('/');
        out.push_str(segment);
    }
    out
}
