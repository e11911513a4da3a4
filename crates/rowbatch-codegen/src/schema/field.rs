use super::{Column, ErrorSet, Name, Relation, RelationKind};

#[derive(Debug)]
pub(crate) struct Field {
    /// Struct field identifier
    pub(crate) ident: syn::Ident,

    /// Field attributes
    pub(crate) attrs: FieldAttr,

    /// Field name
    pub(crate) name: Name,

    /// Field type
    pub(crate) ty: FieldTy,
}

#[derive(Debug, Default)]
pub(crate) struct FieldAttr {
    /// Set if the field is annotated with `#[key]`
    pub(crate) key: Option<syn::Attribute>,

    /// True if the database assigns the value: `#[auto]`
    pub(crate) auto: bool,

    /// Optional database column name
    pub(crate) column: Option<Column>,

    /// Expression to use when the field is blank: `#[column(default = <expr>)]`
    pub(crate) default_expr: Option<syn::Expr>,

    /// Foreign key tag: `#[foreign_key("...")]`
    pub(crate) foreign_key: Option<syn::LitStr>,
}

#[derive(Debug)]
pub(crate) enum FieldTy {
    /// A column holding a value of the given Rust type
    Primitive(syn::Type),

    /// A relation to another record; never written
    Relation(Relation),

    /// Not mapped to a column: `#[skip]` or a bare `#[foreign_key(..)]`
    Unmapped,
}

impl Field {
    pub(super) fn from_ast(field: &syn::Field) -> syn::Result<Self> {
        let Some(ident) = &field.ident else {
            return Err(syn::Error::new_spanned(field, "record fields must be named"));
        };

        let name = Name::from_ident(ident);

        let mut errs = ErrorSet::new();
        let mut attrs = FieldAttr::default();
        let mut relation = None;
        let mut skip = None;

        for attr in &field.attrs {
            let relation_kind = if attr.path().is_ident("belongs_to") {
                Some(RelationKind::BelongsTo)
            } else if attr.path().is_ident("has_many") {
                Some(RelationKind::HasMany)
            } else if attr.path().is_ident("has_one") {
                Some(RelationKind::HasOne)
            } else {
                None
            };

            if let Some(kind) = relation_kind {
                if relation.is_some() {
                    errs.push(syn::Error::new_spanned(
                        attr,
                        "field has more than one relation attribute",
                    ));
                } else {
                    match Relation::from_ast(attr, kind) {
                        Ok(rel) => relation = Some(rel),
                        Err(err) => errs.push(err),
                    }
                }
            } else if attr.path().is_ident("key") {
                if attrs.key.is_some() {
                    errs.push(syn::Error::new_spanned(attr, "duplicate #[key] attribute"));
                } else {
                    attrs.key = Some(attr.clone());
                }
            } else if attr.path().is_ident("auto") {
                if attrs.auto {
                    errs.push(syn::Error::new_spanned(attr, "duplicate #[auto] attribute"));
                } else {
                    attrs.auto = true;
                }
            } else if attr.path().is_ident("skip") {
                if skip.is_some() {
                    errs.push(syn::Error::new_spanned(attr, "duplicate #[skip] attribute"));
                } else {
                    skip = Some(attr);
                }
            } else if attr.path().is_ident("column") {
                if attrs.column.is_some() {
                    errs.push(syn::Error::new_spanned(
                        attr,
                        "duplicate #[column] attribute",
                    ));
                } else {
                    match Column::from_ast(attr) {
                        Ok(mut column) => {
                            attrs.default_expr = column.default.take();
                            attrs.column = Some(column);
                        }
                        Err(err) => errs.push(err),
                    }
                }
            } else if attr.path().is_ident("foreign_key") {
                if attrs.foreign_key.is_some() {
                    errs.push(syn::Error::new_spanned(
                        attr,
                        "duplicate #[foreign_key] attribute",
                    ));
                } else {
                    match attr.parse_args() {
                        Ok(lit) => attrs.foreign_key = Some(lit),
                        Err(err) => errs.push(err),
                    }
                }
            }
        }

        if relation.is_some() && skip.is_some() {
            errs.push(syn::Error::new_spanned(
                field,
                "relation fields are never written; #[skip] is redundant",
            ));
        }

        let mapped = relation.is_none() && skip.is_none() && attrs.foreign_key.is_none();

        if !mapped {
            if let Some(key) = &attrs.key {
                errs.push(syn::Error::new_spanned(
                    key,
                    "#[key] can only be used on fields mapped to a column",
                ));
            }

            if attrs.auto {
                errs.push(syn::Error::new_spanned(
                    field,
                    "#[auto] can only be used on fields mapped to a column",
                ));
            }

            if attrs.column.is_some() {
                errs.push(syn::Error::new_spanned(
                    field,
                    "#[column] can only be used on fields mapped to a column",
                ));
            }

        }

        if attrs.auto && attrs.default_expr.is_some() {
            errs.push(syn::Error::new_spanned(
                field,
                "a column default and #[auto] cannot be combined on the same field",
            ));
        }

        errs.finish()?;

        let ty = match relation {
            Some(relation) => FieldTy::Relation(relation),
            None if !mapped => FieldTy::Unmapped,
            None => FieldTy::Primitive(field.ty.clone()),
        };

        Ok(Self {
            ident: ident.clone(),
            attrs,
            name,
            ty,
        })
    }

    /// Database column the field maps to
    pub(crate) fn column_name(&self) -> String {
        match self.attrs.column.as_ref().and_then(|column| column.name.as_ref()) {
            Some(name) => name.value(),
            None => self.name.snake.clone(),
        }
    }

    /// Foreign key from the relation attribute or a bare `#[foreign_key]`.
    pub(crate) fn foreign_key(&self) -> Option<&syn::LitStr> {
        match &self.ty {
            FieldTy::Relation(relation) => relation
                .foreign_key
                .as_ref()
                .or(self.attrs.foreign_key.as_ref()),
            _ => self.attrs.foreign_key.as_ref(),
        }
    }
}
