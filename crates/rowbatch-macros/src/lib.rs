extern crate proc_macro;

use proc_macro::TokenStream;

#[proc_macro_derive(
    Record,
    attributes(
        table,
        key,
        auto,
        column,
        skip,
        belongs_to,
        has_many,
        has_one,
        foreign_key
    )
)]
pub fn derive_record(input: TokenStream) -> TokenStream {
    match rowbatch_codegen::generate(input.into()) {
        Ok(output) => output.into(),
        Err(e) => e.to_compile_error().into(),
    }
}
