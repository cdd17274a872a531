//! GraphQL query definitions

pub const LISTINGS: &str = r#"
  query Listings {
    listings {
      id
      title
      image
      address
      price
      numOfGuests
      numOfBeds
      numOfBaths
      rating
    }
  }
"#;
