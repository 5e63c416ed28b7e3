//! Proc macros backing `primbox-testhelpers`.

use proc_macro2::{Delimiter, Group, TokenStream, TokenTree};
use quote::quote;

/// Test attribute that installs the tracing subscriber before the body runs.
///
/// ```ignore
/// use primbox_testhelpers::test;
///
/// #[test]
/// fn boxes_int() {
///     // tracing output from primbox-core shows up here
/// }
/// ```
#[proc_macro_attribute]
pub fn test(
    attr: proc_macro::TokenStream,
    item: proc_macro::TokenStream,
) -> proc_macro::TokenStream {
    if !attr.is_empty() {
        return quote! {
            ::core::compile_error!("#[primbox_testhelpers::test] takes no arguments");
        }
        .into();
    }

    let mut tokens: Vec<TokenTree> = TokenStream::from(item).into_iter().collect();

    // The function body is the trailing brace group.
    match tokens.last_mut() {
        Some(TokenTree::Group(body)) if body.delimiter() == Delimiter::Brace => {
            let stmts = body.stream();
            let mut wrapped = Group::new(
                Delimiter::Brace,
                quote! {
                    ::primbox_testhelpers::setup();
                    #stmts
                },
            );
            wrapped.set_span(body.span());
            *body = wrapped;
        }
        _ => {
            return quote! {
                ::core::compile_error!("#[primbox_testhelpers::test] expects a function");
            }
            .into();
        }
    }

    quote! {
        #[::core::prelude::rust_2024::test]
        #(#tokens)*
    }
    .into()
}
