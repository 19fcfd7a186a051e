use leptos::prelude::LeptosOptions;

#[derive(Clone, Debug)]
pub struct Context { // Could be called "AppState"
    pub leptos_options: LeptosOptions,
}

// Looks like we could use `derive(FromRef)` on `Context` if we enabled the macros feature on axum.
impl axum::extract::FromRef<Context> for LeptosOptions {
    fn from_ref(value: &Context) -> Self {
        value.leptos_options.clone()
    }
}
