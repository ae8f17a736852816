#[macro_export]
/// Allow defining an async callback that can be used in Yew components.
/// This macro simplifies the creation of async callbacks by automatically
/// handling the cloning of variables and the spawning of async tasks.
///
/// ## With the macro
/// The macro can be used in two forms:
///
/// 1. Without an event parameter:
/// ```compile_fail
/// let fetch_centers = async_callback!([api, centers, loading, error_msg] {
///     loading.set(true);
///     error_msg.set(None);
///     match api.centers().await {
///         Ok(data) => {
///             centers.set(data);
///             loading.set(false);
///         }
///         Err(err) => {
///             loading.set(false);
///             error_msg.set(Some(format!("Error fetching centers: {err}")));
///         }
///     }
/// });
/// ```
///
/// 2. With an event parameter:
/// ```compile_fail
/// let on_submit = async_callback!([api, credentials, error_msg] |event| {
///     event.prevent_default();
///     error_msg.set(None);
///     if let Err(err) = api.login(&credentials).await {
///         error_msg.set(Some(format!("Login failed: {err}")));
///     }
/// });
/// ```
///
/// Without the macro every captured handle has to be cloned once for the
/// `Callback` and once more for the spawned future, which buries the actual
/// logic under boilerplate.
macro_rules! async_callback {
    // Version with event parameter. This arm must come first: a bare
    // `$body:expr` matcher would otherwise swallow `|e| { ... }` as a
    // closure expression and the handler would never run.
    ([$($var:ident),* $(,)?] |$event:ident| $body:expr) => {
        {
            $(let $var = $var.clone();)*
            Callback::from(move |$event| {
                $(let $var = $var.clone();)*
                wasm_bindgen_futures::spawn_local(async move {
                    $body
                });
            })
        }
    };

    // Version without event parameter
    ([$($var:ident),* $(,)?] $body:expr) => {
        {
            $(let $var = $var.clone();)*
            Callback::from(move |_| {
                $(let $var = $var.clone();)*
                wasm_bindgen_futures::spawn_local(async move {
                    $body
                });
            })
        }
    };
}
