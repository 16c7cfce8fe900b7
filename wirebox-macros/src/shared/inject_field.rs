use syn::{
    Field, FieldsNamed, GenericArgument, Ident, LitStr, PathArguments, Result, Type,
};

/// A struct field annotated `#[inject("Id")]`
///
/// Injected fields must be declared as `Option<Arc<T>>`; `inner_type` is the
/// `T` the resolved singleton is downcast to on assignment.
pub struct InjectField {
    pub ident: Ident,
    pub dependency_id: LitStr,
    pub inner_type: Type,
}

pub fn has_inject_attr(field: &Field) -> bool {
    field.attrs.iter().any(|attr| attr.path().is_ident("inject"))
}

pub fn collect_inject_fields(fields: &FieldsNamed) -> Result<Vec<InjectField>> {
    let mut collected = Vec::new();
    for field in &fields.named {
        let Some(attr) = field.attrs.iter().find(|attr| attr.path().is_ident("inject")) else {
            continue;
        };
        let dependency_id: LitStr = attr.parse_args()?;
        let Some(ident) = field.ident.clone() else {
            continue;
        };
        let Some(inner_type) = injected_inner_type(&field.ty) else {
            return Err(syn::Error::new_spanned(
                &field.ty,
                "injected fields must be declared as `Option<Arc<T>>`",
            ));
        };
        collected.push(InjectField {
            ident,
            dependency_id,
            inner_type,
        });
    }
    Ok(collected)
}

fn injected_inner_type(ty: &Type) -> Option<Type> {
    let arc = generic_inner(ty, "Option")?;
    generic_inner(arc, "Arc").cloned()
}

fn generic_inner<'a>(ty: &'a Type, wrapper: &str) -> Option<&'a Type> {
    let Type::Path(type_path) = ty else {
        return None;
    };
    let segment = type_path.path.segments.last()?;
    if segment.ident != wrapper {
        return None;
    }
    let PathArguments::AngleBracketed(args) = &segment.arguments else {
        return None;
    };
    match args.args.first()? {
        GenericArgument::Type(inner) => Some(inner),
        _ => None,
    }
}
