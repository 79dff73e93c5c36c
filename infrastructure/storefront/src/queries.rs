//! GraphQL documents sent to the Storefront API.

/// Selection shared by every document that answers with a cart.
macro_rules! cart_fields {
    () => {
        r#"
      id
      checkoutUrl
      lines(first: 100) {
        edges {
          node {
            id
            quantity
            merchandise {
              ... on ProductVariant {
                id
                title
                product {
                  title
                }
                price {
                  amount
                  currencyCode
                }
                image {
                  url
                }
              }
            }
          }
        }
      }
      cost {
        totalAmount {
          amount
          currencyCode
        }
      }
"#
    };
}

macro_rules! cart_payload {
    () => {
        concat!(
            "cart {",
            cart_fields!(),
            "}\n    userErrors {\n      field\n      message\n    }"
        )
    };
}

pub const GET_CART: &str = concat!(
    "query GetCart($cartId: ID!) {\n  cart(id: $cartId) {",
    cart_fields!(),
    "  }\n}"
);

pub const CREATE_CART: &str = concat!(
    "mutation CreateCart {\n  cartCreate {\n    ",
    cart_payload!(),
    "\n  }\n}"
);

pub const ADD_LINES: &str = concat!(
    "mutation AddToCart($cartId: ID!, $lines: [CartLineInput!]!) {\n  cartLinesAdd(cartId: $cartId, lines: $lines) {\n    ",
    cart_payload!(),
    "\n  }\n}"
);

pub const UPDATE_LINES: &str = concat!(
    "mutation UpdateCartLine($cartId: ID!, $lines: [CartLineUpdateInput!]!) {\n  cartLinesUpdate(cartId: $cartId, lines: $lines) {\n    ",
    cart_payload!(),
    "\n  }\n}"
);

pub const REMOVE_LINES: &str = concat!(
    "mutation RemoveFromCart($cartId: ID!, $lineIds: [ID!]!) {\n  cartLinesRemove(cartId: $cartId, lineIds: $lineIds) {\n    ",
    cart_payload!(),
    "\n  }\n}"
);

pub const PRODUCT_BY_HANDLE: &str = r#"
query GetProductByHandle($handle: String!) {
  productByHandle(handle: $handle) {
    id
    title
    handle
    description
    images(first: 10) {
      edges {
        node {
          src: url
        }
      }
    }
    variants(first: 10) {
      edges {
        node {
          id
          title
          price {
            amount
            currencyCode
          }
          availableForSale
        }
      }
    }
  }
}
"#;

pub const ALL_PRODUCTS: &str = r#"
query GetAllProducts {
  products(first: 250) {
    edges {
      node {
        id
        title
        handle
        description
        images(first: 1) {
          edges {
            node {
              src: url
            }
          }
        }
        variants(first: 10) {
          edges {
            node {
              id
              title
              price {
                amount
                currencyCode
              }
              availableForSale
            }
          }
        }
      }
    }
  }
}
"#;

#[cfg(test)]
mod tests {
    use super::*;

    fn balanced(document: &str) -> bool {
        let opened = document.matches('{').count();
        let closed = document.matches('}').count();
        opened == closed
    }

    #[test]
    fn should_keep_every_document_balanced() {
        for document in [
            GET_CART,
            CREATE_CART,
            ADD_LINES,
            UPDATE_LINES,
            REMOVE_LINES,
            PRODUCT_BY_HANDLE,
            ALL_PRODUCTS,
        ] {
            assert!(balanced(document), "unbalanced document: {document}");
        }
    }

    #[test]
    fn should_select_user_errors_on_mutations_only() {
        for mutation in [CREATE_CART, ADD_LINES, UPDATE_LINES, REMOVE_LINES] {
            assert!(mutation.contains("userErrors"));
            assert!(mutation.contains("lines(first: 100)"));
        }
        assert!(!GET_CART.contains("userErrors"));
    }
}
