use super::Expand;
use crate::schema::{FieldTy, RelationKind};

use proc_macro2::TokenStream;
use quote::quote;

impl Expand<'_> {
    pub(super) fn expand_model_schema(&self) -> TokenStream {
        let rowbatch = &self.rowbatch;
        let name = self.model.ident.to_string();
        let table = self.model.table_name();
        let fields = self.expand_model_fields();

        quote! {
            fn schema() -> &'static #rowbatch::Model {
                static SCHEMA: std::sync::OnceLock<#rowbatch::Model> = std::sync::OnceLock::new();

                SCHEMA.get_or_init(|| {
                    #[allow(unused_imports)]
                    use #rowbatch::schema::{Field, FieldTy, RelationKind};

                    #rowbatch::Model {
                        name: #name,
                        table: #table.to_string(),
                        fields: vec![ #( #fields ),* ],
                    }
                })
            }
        }
    }

    fn expand_model_fields(&self) -> Vec<TokenStream> {
        let rowbatch = &self.rowbatch;

        self.model
            .fields
            .iter()
            .enumerate()
            .map(|(index, field)| {
                let name = field.ident.to_string();
                let column = field.column_name();
                let primary_key = self.model.primary_key.contains(&index);
                let auto_increment = field.attrs.auto;

                let foreign_key = match field.foreign_key() {
                    Some(fk) => quote!(Some(#fk.to_string())),
                    None => quote!(None),
                };

                let default = match &field.attrs.default_expr {
                    Some(expr) => quote!({
                        let default: fn() -> #rowbatch::Value = || #rowbatch::Value::from(#expr);
                        Some(default)
                    }),
                    None => quote!(None),
                };

                let (ty, nullable) = match &field.ty {
                    FieldTy::Primitive(ty) => (
                        quote!(FieldTy::Primitive(<#ty as #rowbatch::Primitive>::TYPE)),
                        quote!(<#ty as #rowbatch::Primitive>::NULLABLE),
                    ),
                    FieldTy::Relation(relation) => {
                        let kind = match relation.kind {
                            RelationKind::BelongsTo => quote!(BelongsTo),
                            RelationKind::HasMany => quote!(HasMany),
                            RelationKind::HasOne => quote!(HasOne),
                        };
                        (quote!(FieldTy::Relation(RelationKind::#kind)), quote!(true))
                    }
                    FieldTy::Unmapped => (quote!(FieldTy::Unmapped), quote!(true)),
                };

                quote! {
                    Field {
                        name: #name,
                        column: #column.to_string(),
                        ty: #ty,
                        nullable: #nullable,
                        primary_key: #primary_key,
                        auto_increment: #auto_increment,
                        default: #default,
                        foreign_key: #foreign_key,
                    }
                }
            })
            .collect()
    }
}
