#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum RelationKind {
    BelongsTo,
    HasMany,
    HasOne,
}

#[derive(Debug)]
pub(crate) struct Relation {
    pub(crate) kind: RelationKind,

    /// Optional `foreign_key = "..."` argument
    pub(crate) foreign_key: Option<syn::LitStr>,
}

impl Relation {
    pub(super) fn from_ast(attr: &syn::Attribute, kind: RelationKind) -> syn::Result<Self> {
        let mut foreign_key = None;

        // `#[belongs_to]` alone is allowed; arguments are optional.
        if let syn::Meta::List(_) = &attr.meta {
            attr.parse_nested_meta(|meta| {
                if meta.path.is_ident("foreign_key") {
                    if foreign_key.is_some() {
                        return Err(meta.error("duplicate `foreign_key` argument"));
                    }

                    foreign_key = Some(meta.value()?.parse()?);
                    Ok(())
                } else {
                    Err(syn::Error::new_spanned(&meta.path, "expected `foreign_key`"))
                }
            })?;
        }

        Ok(Self { kind, foreign_key })
    }
}
