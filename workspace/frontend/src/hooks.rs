/// State of one polled API resource
#[derive(Clone, PartialEq)]
pub enum FetchState<T> {
    Loading,
    Success(T),
    Error(String),
}
