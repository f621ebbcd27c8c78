/// Derive macro generating an implementation of the trait `Attractor`.
///
/// The type needs fields named `position` and `mass`. If it also has an `id` field, the generated
/// `id` method returns it, otherwise the attractor is anonymous.
#[proc_macro_derive(Attractor)]
pub fn attractor_derive(input: proc_macro::TokenStream) -> proc_macro::TokenStream {
    let ast = syn::parse(input);

    impl_attractor(ast).unwrap_or_else(|e| syn::Error::to_compile_error(&e).into())
}

fn impl_attractor(input: syn::Result<syn::DeriveInput>) -> syn::Result<proc_macro::TokenStream> {
    let input = input?;

    let struct_data = match &input.data {
        syn::Data::Struct(struct_data) => Ok(struct_data),
        syn::Data::Enum(enum_data) => Err(syn::Error::new_spanned(
            enum_data.enum_token,
            "the `Attractor` trait can only be derived for struct types",
        )),
        syn::Data::Union(union_data) => Err(syn::Error::new_spanned(
            union_data.union_token,
            "the `Attractor` trait can only be derived for struct types",
        )),
    }?;

    let position_ty = &required_field(struct_data, "position")?.ty;
    let mass_ty = &required_field(struct_data, "mass")?.ty;

    let id_method = match get_field(struct_data, "id") {
        Some(field) => {
            let id_ty = &field.ty;
            quote::quote! {
                #[inline]
                fn id(&self) -> ::core::option::Option<#id_ty> {
                    ::core::option::Option::Some(self.id)
                }
            }
        }
        None => quote::quote! {},
    };

    let name = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    Ok(quote::quote! {
        impl #impl_generics Attractor for #name #ty_generics #where_clause {
            #[inline]
            fn position(&self) -> #position_ty {
                self.position
            }

            #[inline]
            fn mass(&self) -> #mass_ty {
                self.mass
            }

            #id_method
        }
    }
    .into())
}

fn get_field<'a>(struct_data: &'a syn::DataStruct, name: &str) -> Option<&'a syn::Field> {
    struct_data
        .fields
        .iter()
        .find(|field| field.ident.as_ref().is_some_and(|ident| ident == name))
}

fn required_field<'a>(struct_data: &'a syn::DataStruct, name: &str) -> syn::Result<&'a syn::Field> {
    get_field(struct_data, name).ok_or_else(|| {
        syn::Error::new_spanned(&struct_data.fields, format!("no `{name}` field"))
    })
}
