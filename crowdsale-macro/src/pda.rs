// File: crowdsale-macro/src/pda.rs
// Project: crowdsale-onchain
// Creation date: Monday 05 October 2026
// Author: Crowdsale developers
// -----
// Last modified: Monday 19 October 2026 @ 14:41:02
// Modified by: Crowdsale developers
// -----
// Copyright © 2026 <Crowdsale> - All rights reserved

use darling::{ast::NestedMeta, util::parse_expr, Error, FromMeta};
use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::{format_ident, quote};
use syn::{parse::Parser, parse_macro_input, DeriveInput, Expr, ExprLit, ExprPath, Ident};

#[derive(Debug, FromMeta)]
struct PdaArgs {
    kind: syn::Path,
    #[darling(multiple, with = parse_expr::preserve_str_literal)]
    seed: Vec<Expr>,
}

/// One `seed = ...` argument: either a literal or the name of a field.
enum SeedArg {
    Literal(syn::Lit),
    Field(Ident),
}

fn parse_seed(expr: &Expr) -> syn::Result<SeedArg> {
    match expr {
        Expr::Lit(ExprLit { lit, .. }) => Ok(SeedArg::Literal(lit.clone())),
        Expr::Path(ExprPath { path, .. }) => path
            .get_ident()
            .cloned()
            .map(SeedArg::Field)
            .ok_or_else(|| syn::Error::new_spanned(path, "seed field must be a single ident")),
        _ => Err(syn::Error::new_spanned(
            expr,
            "seed should be either a literal or a field",
        )),
    }
}

// Seeds as they are used to sign with the PDA, bump included.
fn signing_seeds(seeds: &[SeedArg]) -> TokenStream2 {
    let items = seeds.iter().map(|seed| match seed {
        SeedArg::Literal(lit) => quote! { Seed::from(#lit) },
        SeedArg::Field(ident) => quote! { Seed::from(self.#ident) },
    });
    quote! { [#(#items,)* Seed::from(self.bump)] }
}

// Builds `get_address`, taking one `Into<Seed>` parameter per field seed.
fn get_address_fn(crate_ident: &Ident, seeds: &[SeedArg]) -> TokenStream2 {
    let mut params = Vec::new();
    let mut casts = Vec::new();
    let mut doc = String::new();
    let mut bytes = Vec::new();
    for (idx, seed) in seeds.iter().enumerate() {
        match seed {
            SeedArg::Literal(lit) => bytes.push(quote! { #lit.as_bytes() }),
            SeedArg::Field(ident) => {
                let generic = format_ident!("S{}", idx);
                params.push(quote! { #ident: #generic });
                casts.push(quote! {
                    let #ident: #crate_ident::pda::Seed = #ident.into();
                    let #ident: ::std::vec::Vec<u8> = #ident.into();
                });
                doc.push_str(&format!(" * `{ident}`\n"));
                bytes.push(quote! { #ident.as_slice() });
            }
        }
    }
    let generics = seeds.iter().enumerate().filter_map(|(idx, seed)| match seed {
        SeedArg::Field(_) => {
            let generic = format_ident!("S{}", idx);
            Some(quote! { #generic: Into<#crate_ident::pda::Seed> })
        }
        SeedArg::Literal(_) => None,
    });
    let doc = format!(
        "Get the PDA's address.\n\n # Parameters\n{doc} * `program_id` - Program owning the PDA.\n\n # Returns\n\n * Tuple of the PDA's public key and its bump"
    );

    quote! {
        #[doc = #doc]
        #[must_use]
        pub fn get_address<#(#generics),*>(
            #(#params,)* program_id: &solana_program::pubkey::Pubkey
        ) -> (solana_program::pubkey::Pubkey, u8) {
            #(#casts)*
            solana_program::pubkey::Pubkey::find_program_address(&[#(#bytes),*], program_id)
        }
    }
}

// Implements most of a PDA's boilerplate.
pub fn impl_pda(attrs: TokenStream, input: TokenStream) -> TokenStream {
    let mut ast = parse_macro_input!(input as DeriveInput);
    let name = ast.ident.clone();

    let attr_args = match NestedMeta::parse_meta_list(attrs.into()) {
        Ok(v) => v,
        Err(e) => return TokenStream::from(Error::from(e).write_errors()),
    };

    let PdaArgs { seed, kind } = match PdaArgs::from_list(&attr_args) {
        Ok(params) => params,
        Err(error) => return TokenStream::from(error.write_errors()),
    };

    if seed.is_empty() {
        return TokenStream::from(Error::missing_field("seed").write_errors());
    }
    let seeds = match seed.iter().map(parse_seed).collect::<syn::Result<Vec<_>>>() {
        Ok(seeds) => seeds,
        Err(err) => return err.into_compile_error().into(),
    };

    let crate_ident = match std::env::var("CARGO_PKG_NAME").as_deref() {
        Ok("crowdsale-common") => format_ident!("crate"),
        _ => format_ident!("crowdsale_common"),
    };

    let syn::Data::Struct(struct_data) = &mut ast.data else {
        return syn::Error::new(ast.ident.span(), "the PDA attribute can only be used on a struct")
            .into_compile_error()
            .into();
    };
    let syn::Fields::Named(fields) = &mut struct_data.fields else {
        return syn::Error::new(ast.ident.span(), "the PDA struct must have named fields")
            .into_compile_error()
            .into();
    };
    let extra = [
        quote! {
            /// Type of the PDA
            pub pda_type: #crate_ident::pda::PdaType
        },
        quote! {
            /// Bump for the PDA
            pub bump: u8
        },
    ];
    for (idx, tokens) in extra.into_iter().enumerate() {
        match syn::Field::parse_named.parse2(tokens) {
            Ok(field) => fields.named.insert(idx, field),
            Err(err) => return err.into_compile_error().into(),
        }
    }

    let pda_seeds = signing_seeds(&seeds);
    let get_address = get_address_fn(&crate_ident, &seeds);

    quote! {
        #[derive(Clone, Debug, PartialEq, Eq, borsh::BorshSerialize, borsh::BorshDeserialize, shank::ShankAccount)]
        #ast

        #[automatically_derived]
        impl #crate_ident::pda::CrowdsalePda for #name {
            const PDA_TYPE: #crate_ident::pda::PdaType = #kind;

            fn get_bump(&self) -> u8 {
                self.bump
            }

            fn is_valid(&self) -> bool {
                self.pda_type == Self::PDA_TYPE
            }

            fn seeds(&self) -> Vec<Vec<u8>> {
                use #crate_ident::pda::Seed;
                #pda_seeds.into_iter().map(Into::into).collect()
            }
        }

        #[automatically_derived]
        impl #name {
            #get_address
        }
    }
    .into()
}
