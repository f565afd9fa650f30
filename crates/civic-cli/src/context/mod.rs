mod app_context;

pub use app_context::AppContext;

#[cfg(test)]
pub(crate) use app_context::tests;
