use super::Expand;
use crate::schema::FieldTy;

use proc_macro2::TokenStream;
use quote::quote;

impl Expand<'_> {
    pub(super) fn expand_record_impl(&self) -> TokenStream {
        let rowbatch = &self.rowbatch;
        let model_ident = &self.model.ident;
        let model_schema = self.expand_model_schema();
        let field_values = self.expand_field_values();
        let load_fields = self.expand_load_fields();

        quote! {
            impl #rowbatch::Record for #model_ident {
                #model_schema

                fn field_values(&self) -> Vec<#rowbatch::FieldValue> {
                    vec![ #( #field_values ),* ]
                }

                fn load(mut row: #rowbatch::Row) -> #rowbatch::Result<Self> {
                    Ok(#model_ident {
                        #( #load_fields, )*
                    })
                }
            }
        }
    }

    pub(super) fn expand_returning_impl(&self) -> TokenStream {
        let rowbatch = &self.rowbatch;
        let model_ident = &self.model.ident;

        quote! {
            impl #rowbatch::Returning for #model_ident {
                fn from_row(row: #rowbatch::Row, _model: &#rowbatch::Model) -> #rowbatch::Result<Self> {
                    <#model_ident as #rowbatch::Record>::load(row)
                }
            }
        }
    }

    fn expand_field_values(&self) -> Vec<TokenStream> {
        let rowbatch = &self.rowbatch;

        self.model
            .fields
            .iter()
            .map(|field| {
                let ident = &field.ident;

                match &field.ty {
                    FieldTy::Primitive(_) => quote!(#rowbatch::FieldValue::primitive(&self.#ident)),
                    FieldTy::Relation(_) | FieldTy::Unmapped => {
                        quote!(#rowbatch::FieldValue::Unmapped)
                    }
                }
            })
            .collect()
    }

    fn expand_load_fields(&self) -> Vec<TokenStream> {
        let rowbatch = &self.rowbatch;

        self.model
            .fields
            .iter()
            .map(|field| {
                let ident = &field.ident;

                match &field.ty {
                    FieldTy::Primitive(ty) => {
                        let column = field.column_name();
                        quote! {
                            #ident: match row.take(#column) {
                                Some(value) => <#ty as #rowbatch::Primitive>::load(value)?,
                                None => #rowbatch::Default::default(),
                            }
                        }
                    }
                    FieldTy::Relation(_) | FieldTy::Unmapped => {
                        quote!(#ident: #rowbatch::Default::default())
                    }
                }
            })
            .collect()
    }
}
