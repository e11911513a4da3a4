use super::ErrorSet;

#[derive(Debug, Default)]
pub(crate) struct ModelAttr {
    /// Optional database table name to map the record to
    pub(crate) table: Option<syn::LitStr>,
}

impl ModelAttr {
    pub(super) fn populate_from_ast(&mut self, attrs: &[syn::Attribute]) -> syn::Result<()> {
        let mut errs = ErrorSet::new();

        for attr in attrs {
            if attr.path().is_ident("table") {
                if self.table.is_some() {
                    errs.push(syn::Error::new_spanned(attr, "duplicate `table` attribute"));
                    continue;
                }

                let syn::Meta::NameValue(meta) = &attr.meta else {
                    errs.push(syn::Error::new_spanned(
                        attr,
                        "expected `table = \"table_name\"`",
                    ));
                    continue;
                };

                let syn::Expr::Lit(syn::ExprLit {
                    lit: syn::Lit::Str(lit),
                    ..
                }) = &meta.value
                else {
                    errs.push(syn::Error::new_spanned(
                        attr,
                        "expected `table = \"table_name\"`",
                    ));
                    continue;
                };

                self.table = Some(lit.clone());
            }
        }

        errs.finish()
    }
}
