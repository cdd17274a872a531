//! GraphQL mutation definitions

// ============================================================================
// LISTING MUTATIONS
// ============================================================================

pub const DELETE_LISTING: &str = r#"
  mutation DeleteListing($id: ID!) {
    deleteListing(id: $id) {
      id
    }
  }
"#;

// ============================================================================
// SESSION MUTATIONS
// ============================================================================

pub const LOG_IN: &str = r#"
  mutation LogIn($input: LogInInput) {
    logIn(input: $input) {
      id
      token
      avatar
      hasWallet
      didRequest
    }
  }
"#;

pub const LOG_OUT: &str = r#"
  mutation LogOut {
    logOut {
      id
      token
      avatar
      hasWallet
      didRequest
    }
  }
"#;
