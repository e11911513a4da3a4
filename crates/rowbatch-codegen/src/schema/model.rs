use super::{ErrorSet, Field, FieldTy, ModelAttr, Name};

#[derive(Debug)]
pub(crate) struct Model {
    /// Record name
    pub(crate) name: Name,

    /// Type identifier
    pub(crate) ident: syn::Ident,

    /// Record fields, in declaration order
    pub(crate) fields: Vec<Field>,

    /// Indices into `fields` of the primary key
    pub(crate) primary_key: Vec<usize>,

    /// Optional table to map the record to
    pub(crate) table: Option<syn::LitStr>,
}

impl Model {
    pub(crate) fn from_ast(ast: &syn::DeriveInput) -> syn::Result<Self> {
        let node = match &ast.data {
            syn::Data::Struct(data) => match &data.fields {
                syn::Fields::Named(node) => node,
                fields => {
                    return Err(syn::Error::new_spanned(
                        fields,
                        "record fields must be named",
                    ))
                }
            },
            syn::Data::Enum(data) => {
                return Err(syn::Error::new(
                    data.enum_token.span,
                    "`Record` can only be derived for structs",
                ))
            }
            syn::Data::Union(data) => {
                return Err(syn::Error::new(
                    data.union_token.span,
                    "`Record` can only be derived for structs",
                ))
            }
        };

        // Generics are not supported yet
        if !ast.generics.params.is_empty() {
            return Err(syn::Error::new_spanned(
                &ast.generics,
                "record generics are not supported",
            ));
        }

        let mut model_attr = ModelAttr::default();
        let mut fields = vec![];
        let mut errs = ErrorSet::new();

        if let Err(err) = model_attr.populate_from_ast(&ast.attrs) {
            errs.push(err);
        }

        for node in node.named.iter() {
            match Field::from_ast(node) {
                Ok(field) => fields.push(field),
                Err(err) => errs.push(err),
            }
        }

        errs.finish()?;

        let mut primary_key: Vec<_> = fields
            .iter()
            .enumerate()
            .filter(|(_, field)| field.attrs.key.is_some())
            .map(|(index, _)| index)
            .collect();

        // Without an explicit key, a mapped field named `id` is the key.
        if primary_key.is_empty() {
            primary_key.extend(fields.iter().position(|field| {
                field.ident == "id" && matches!(field.ty, FieldTy::Primitive(_))
            }));
        }

        Ok(Self {
            name: Name::from_ident(&ast.ident),
            ident: ast.ident.clone(),
            fields,
            primary_key,
            table: model_attr.table,
        })
    }

    pub(crate) fn table_name(&self) -> String {
        match &self.table {
            Some(table) => table.value(),
            None => self.name.table(),
        }
    }
}
