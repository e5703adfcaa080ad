pub(crate) fn location_pathname() -> Option<String> {
    super::interop::location_pathname()
}

pub(crate) fn meta_content(name: &str) -> Option<String> {
    super::interop::meta_content(name)
}
