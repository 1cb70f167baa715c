#[macro_export]
/// Builds a Yew event `Callback` that runs an async block on the browser
/// event loop, cloning the listed handles into the closure and again into
/// the spawned future.
///
/// The first block runs synchronously while the event is still being
/// dispatched, so `prevent_default` belongs there; by the time the async
/// block runs the browser has already acted on the event.
///
/// ```compile_fail
/// let on_submit = async_callback!([controller, email, password] |event: SubmitEvent| {
///     event.prevent_default();
/// } async {
///     let _ = controller.submit(&email, &password).await;
/// });
/// ```
///
/// The manual equivalent clones every handle twice by hand and wraps the
/// async block in `wasm_bindgen_futures::spawn_local` inside
/// `Callback::from`.
macro_rules! async_callback {
    ([$($var:ident),* $(,)?] |$event:ident : $event_ty:ty| $prelude:block async $body:block) => {
        {
            $(let $var = $var.clone();)*
            Callback::from(move |$event: $event_ty| {
                $prelude
                $(let $var = $var.clone();)*
                wasm_bindgen_futures::spawn_local(async move { $body });
            })
        }
    };
}
