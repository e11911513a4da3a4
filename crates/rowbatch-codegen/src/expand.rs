mod record;
mod schema;

use crate::schema::Model;

use proc_macro2::TokenStream;
use quote::quote;

struct Expand<'a> {
    /// The record being expanded
    model: &'a Model,

    /// Path prefix for rowbatch types
    rowbatch: TokenStream,
}

impl Expand<'_> {
    fn expand(&self) -> TokenStream {
        let record_impl = self.expand_record_impl();
        let returning_impl = self.expand_returning_impl();

        wrap_in_const(quote! {
            #record_impl
            #returning_impl
        })
    }
}

pub(super) fn record(model: &Model) -> TokenStream {
    Expand {
        model,
        rowbatch: quote!(_rowbatch::codegen_support),
    }
    .expand()
}

fn wrap_in_const(code: TokenStream) -> TokenStream {
    quote! {
        const _: () = {
            use rowbatch as _rowbatch;
            #code
        };
    }
}
