//! Demo customers stored at startup

use domain_customer::Customer;

fn demo_customer(id: i64, first: &str, last: &str, contacts: &[&str]) -> Customer {
    let mut customer = Customer::new();
    customer.set_id(id).set_name(Some(first), Some(last));
    for contact in contacts {
        customer.add_contact(Some(contact));
    }
    customer
}

/// The three demo customers, ids 1 to 3
pub fn demo_customers() -> Vec<Customer> {
    vec![
        demo_customer(1, "Eric", "Meyer", &["eric98@yahoo.com", "(030) 3945-642298"]),
        demo_customer(2, "Anne", "Bayer", &["anne24@yahoo.de", "(030) 3481-23352"]),
        demo_customer(3, "Tim", "Schulz-Mueller", &["tim2346@gmx.de"]),
    ]
}
