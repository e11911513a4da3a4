#[derive(Debug)]
pub(crate) struct Column {
    pub(crate) name: Option<syn::LitStr>,
    pub(crate) default: Option<syn::Expr>,
}

impl Column {
    pub(super) fn from_ast(attr: &syn::Attribute) -> syn::Result<Column> {
        attr.parse_args()
    }
}

impl syn::parse::Parse for Column {
    fn parse(input: syn::parse::ParseStream) -> syn::Result<Self> {
        let mut result = Self {
            name: None,
            default: None,
        };

        // Allowed syntax:
        //
        // #[column("name")]
        // #[column(default = <expr>)]
        // #[column("name", default = <expr>)]
        loop {
            let lookahead = input.lookahead1();

            if lookahead.peek(syn::LitStr) {
                if result.name.is_some() {
                    return Err(syn::Error::new(input.span(), "duplicate column name"));
                }

                let name: syn::LitStr = input.parse()?;

                if name.value().is_empty() {
                    return Err(syn::Error::new_spanned(&name, "column name cannot be empty"));
                }

                result.name = Some(name);
            } else if lookahead.peek(kw::default) {
                if result.default.is_some() {
                    return Err(syn::Error::new(input.span(), "duplicate column default"));
                }
                let _default_token: kw::default = input.parse()?;
                let _eq_token: syn::Token![=] = input.parse()?;
                result.default = Some(input.parse()?);
            } else {
                return Err(lookahead.error());
            }

            if input.is_empty() {
                break;
            }
            let _comma_token: syn::Token![,] = input.parse()?;
        }

        Ok(result)
    }
}

mod kw {
    syn::custom_keyword!(default);
}
