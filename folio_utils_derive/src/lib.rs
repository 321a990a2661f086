use proc_macro::TokenStream;
use quote::quote;
use syn::{parse_macro_input, ItemFn};

/// Wraps a function in a trace-level span that records its arguments and
/// return value.
///
/// Any arguments are forwarded to [`tracing::instrument`], so fields that
/// are expensive or sensitive can be skipped with `skip(...)`.
#[proc_macro_attribute]
pub fn trace_instrument(meta: TokenStream, input: TokenStream) -> TokenStream {
    let meta = proc_macro2::TokenStream::from(meta);
    let ItemFn {
        attrs,
        vis,
        sig,
        block,
    } = parse_macro_input!(input as ItemFn);

    let meta = if meta.is_empty() {
        quote! {}
    } else {
        quote! { , #meta }
    };

    quote! {
        #[::tracing::instrument(level = "trace", ret(level = "trace") #meta)]
        #(#attrs)*
        #vis #sig {
            ::tracing::trace!("call");
            #block
        }
    }
    .into()
}
