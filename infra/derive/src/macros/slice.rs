use proc_macro2::TokenStream;
use quote::{format_ident, quote};
use syn::parse::Parser;
use syn::{ItemStruct, LitStr};

pub fn expand_slice(args: TokenStream, input: ItemStruct) -> TokenStream {
    let mut name: Option<LitStr> = None;
    let parsed = syn::meta::parser(|meta| {
        if meta.path.is_ident("name") {
            name = Some(meta.value()?.parse()?);
            Ok(())
        } else {
            Err(meta.error("unsupported argument; expected `name = \"...\"`"))
        }
    })
    .parse2(args);
    if let Err(err) = parsed {
        return err.to_compile_error();
    }

    let wrapper_ident = &input.ident;
    let vis = &input.vis;
    let fields = &input.fields;
    let attrs = &input.attrs;
    let inner_ident = format_ident!("{wrapper_ident}Inner");
    let slice_name = name.map_or_else(|| wrapper_ident.to_string().to_lowercase(), |n| n.value());
    let semicolon = matches!(fields, syn::Fields::Unnamed(_)).then(|| quote! { ; });

    quote! {
        #(#attrs)*
        #[derive(Debug, Clone)]
        #vis struct #inner_ident #fields #semicolon

        #[derive(Debug, Clone)]
        #vis struct #wrapper_ident {
            inner: std::sync::Arc<#inner_ident>,
        }

        impl #wrapper_ident {
            /// Registry name of this slice.
            pub const NAME: &'static str = #slice_name;

            #[must_use]
            pub fn new(inner: #inner_ident) -> Self {
                Self { inner: std::sync::Arc::new(inner) }
            }
        }

        #[automatically_derived]
        impl std::ops::Deref for #wrapper_ident {
            type Target = #inner_ident;

            fn deref(&self) -> &Self::Target {
                &self.inner
            }
        }

        #[automatically_derived]
        impl ::vhub_kernel::domain::registry::FeatureSlice for #wrapper_ident {
            fn name(&self) -> &'static str {
                Self::NAME
            }

            fn as_any(&self) -> &dyn std::any::Any {
                self
            }
        }
    }
}
