// Debug tracing for pipeline internals. Compiles to nothing outside of
// test builds.
#[macro_export]
macro_rules! trace(
    ( $($thing:expr),* ) => { if cfg!(test) { println! { $($thing),* } } };
);
