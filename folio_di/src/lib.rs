//! Compile-time dependency injection.
//!
//! A provider (declared with [`provider!`]) holds the leaf dependencies that
//! cannot be constructed from scratch, such as configuration. Every other
//! component derives [`Build`] and is assembled recursively from its fields.
//! Built components are cached in the provider, so a component requested
//! twice is the same (cloned) instance and shares its `#[state]`.

extern crate self as folio_di;

pub use folio_di_derive::Build;
pub use typemap::TypeMap;

mod macros;
mod typemap;

pub trait Provider: Sized {
    /// Returns a clone of the cached instance of `T`, if one was built before.
    fn get<T: 'static + Clone>(&self) -> Option<T>;

    /// Caches an instance of `T`, replacing any previous one.
    fn insert<T: 'static>(&mut self, value: T);
}

#[diagnostic::on_unimplemented(
    message = "The type `{Self}` cannot be built using the provider `{P}`",
    note = "Add `{Self}` to the provider `{P}` or implement `Build` for `{Self}` and make sure \
            all dependencies are satisfied"
)]
pub trait Build<P: Provider>: Clone + 'static {
    fn build(provider: &mut P) -> Self;
}

pub trait Provide: Provider {
    fn provide<T: Build<Self>>(&mut self) -> T {
        T::build(self)
    }
}

impl<P: Provider> Provide for P {}
