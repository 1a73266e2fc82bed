use proc_macro::TokenStream;
use quote::quote;
use syn::parse::{Parse, ParseStream, Result};
use syn::{parse_macro_input, Ident, Token};

/// Parsed form of an `expr!` invocation
enum Ast {
    /// An in-scope `Condition` value, referenced by identifier
    Value(Ident),
    /// A string literal, turned into a fresh atom
    Atom(syn::LitStr),
    /// `0` or `1`, turned into the constant sentinels
    Constant(bool),
    Not(Box<Ast>),
    And(Box<Ast>, Box<Ast>),
    Or(Box<Ast>, Box<Ast>),
}

impl Ast {
    /// Emit combinator calls for this node
    ///
    /// Identifiers are used by reference; the `and`/`or`/`not` combinators
    /// take `&self` and clone internally, so the macro never consumes the
    /// values it is given.
    fn emit(&self) -> proc_macro2::TokenStream {
        match self {
            Ast::Value(ident) => quote! { #ident },
            Ast::Atom(lit) => quote! { Condition::atom(#lit) },
            Ast::Constant(true) => quote! { Condition::AlwaysTrue },
            Ast::Constant(false) => quote! { Condition::AlwaysFalse },
            Ast::Not(inner) => {
                let inner = inner.emit();
                quote! { (&(#inner)).not() }
            }
            Ast::And(left, right) => {
                let left = left.emit();
                let right = right.emit();
                quote! { (&(#left)).and(&(#right)) }
            }
            Ast::Or(left, right) => {
                let left = left.emit();
                let right = right.emit();
                quote! { (&(#left)).or(&(#right)) }
            }
        }
    }
}

struct ExprInput {
    ast: Ast,
}

impl Parse for ExprInput {
    fn parse(input: ParseStream) -> Result<Self> {
        let ast = parse_disjunction(input)?;
        Ok(ExprInput { ast })
    }
}

/// OR level (lowest precedence): `+` or `|`
fn parse_disjunction(input: ParseStream) -> Result<Ast> {
    let mut left = parse_conjunction(input)?;

    while input.peek(Token![+]) || input.peek(Token![|]) {
        if input.peek(Token![+]) {
            input.parse::<Token![+]>()?;
        } else {
            input.parse::<Token![|]>()?;
        }
        let right = parse_conjunction(input)?;
        left = Ast::Or(Box::new(left), Box::new(right));
    }

    Ok(left)
}

/// AND level: `*` or `&`
fn parse_conjunction(input: ParseStream) -> Result<Ast> {
    let mut left = parse_negation(input)?;

    while input.peek(Token![*]) || input.peek(Token![&]) {
        if input.peek(Token![*]) {
            input.parse::<Token![*]>()?;
        } else {
            input.parse::<Token![&]>()?;
        }
        let right = parse_negation(input)?;
        left = Ast::And(Box::new(left), Box::new(right));
    }

    Ok(left)
}

/// NOT level: `!` or `~`, both right-associative
fn parse_negation(input: ParseStream) -> Result<Ast> {
    if input.peek(Token![!]) {
        input.parse::<Token![!]>()?;
        Ok(Ast::Not(Box::new(parse_negation(input)?)))
    } else if input.peek(Token![~]) {
        input.parse::<Token![~]>()?;
        Ok(Ast::Not(Box::new(parse_negation(input)?)))
    } else {
        parse_operand(input)
    }
}

/// Operands: parenthesized groups, string-literal atoms, `0`/`1`, identifiers
fn parse_operand(input: ParseStream) -> Result<Ast> {
    if input.peek(syn::token::Paren) {
        let content;
        syn::parenthesized!(content in input);
        parse_disjunction(&content)
    } else if input.peek(syn::LitStr) {
        let lit: syn::LitStr = input.parse()?;
        Ok(Ast::Atom(lit))
    } else if input.peek(syn::LitInt) {
        let lit: syn::LitInt = input.parse()?;
        let value: u8 = lit.base10_parse()?;
        match value {
            0 => Ok(Ast::Constant(false)),
            1 => Ok(Ast::Constant(true)),
            _ => Err(syn::Error::new(
                lit.span(),
                "only 0 and 1 are supported as boolean constants",
            )),
        }
    } else {
        let ident: Ident = input.parse()?;
        Ok(Ast::Value(ident))
    }
}

/// The `expr!` procedural macro for building condition trees
///
/// Expands to calls of the `Condition` combinators, so `Condition` must be in
/// scope at the call site.
///
/// # Supported syntax
///
/// - `a` - any in-scope `Condition` value
/// - `"a"` - string literal, becomes `Condition::atom("a")`
/// - `0` / `1` - the `AlwaysFalse` / `AlwaysTrue` sentinels
/// - `!a` or `~a` - negation
/// - `a * b` or `a & b` - conjunction
/// - `a + b` or `a | b` - disjunction
/// - `(a + b) * c` - parentheses for grouping
///
/// Precedence, from highest to lowest: parentheses, NOT, AND, OR.
///
/// # Examples
///
/// ```ignore
/// use quine_logic::{expr, Condition};
///
/// // String literals create atoms on the fly
/// let xor = expr!("a" * !"b" + !"a" * "b");
///
/// // Or compose existing values
/// let a = Condition::atom("a");
/// let b = Condition::atom("b");
/// let nand = expr!(!(a * b));
/// ```
#[proc_macro]
pub fn expr(input: TokenStream) -> TokenStream {
    let parsed = parse_macro_input!(input as ExprInput);
    TokenStream::from(parsed.ast.emit())
}
