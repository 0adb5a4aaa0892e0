/// Turn a handler function into a [`HandlerFunc`](crate::handler::HandlerFunc).
///
/// `handler_func!(f)` for `async fn f(event) -> Result<(), Error>`,
/// `handler_func!(sync f)` for a plain `fn f(event) -> Result<(), Error>`.
#[macro_export]
macro_rules! handler_func {
    (sync $func:expr $(,)?) => {
        |event| Box::pin(::std::future::ready($func(event)))
    };
    ($func:expr $(,)?) => {
        |event| Box::pin($func(event))
    };
}
