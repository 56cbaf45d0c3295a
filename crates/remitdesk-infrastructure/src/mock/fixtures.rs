//! Fixture records served by the simulators.
//!
//! Customers are Nigerians resident in Canada, the platform's primary
//! CAD to NGN corridor. There is no referential integrity between
//! collections.

use remitdesk_core::agent::{Agent, AgentTier};
use remitdesk_core::business::{Business, KybStatus};
use remitdesk_core::currency::{CountryCurrency, CurrencyRoute, RouteStatus};
use remitdesk_core::settlement::{Settlement, SettlementStatus};
use remitdesk_core::transaction::{Transaction, TransactionStatus, TransactionType};
use remitdesk_core::user::{AccountStatus, KycStatus, User};
use remitdesk_core::virtual_account::VirtualAccount;

struct Person {
    id: &'static str,
    first_name: &'static str,
    middle_name: Option<&'static str>,
    last_name: &'static str,
    email: &'static str,
    phone: &'static str,
    kyc_status: KycStatus,
    dob: &'static str,
    address: &'static str,
}

const PEOPLE: [Person; 4] = [
    Person {
        id: "1",
        first_name: "Chidi",
        middle_name: Some("Chukwuemeka"),
        last_name: "Okafor",
        email: "chidi.okafo@example.com",
        phone: "+1 416 555 0123",
        kyc_status: KycStatus::Tier2Verified,
        dob: "1985-06-15",
        address: "123 Yonge St, Toronto, ON M5C 1W4, Canada",
    },
    Person {
        id: "2",
        first_name: "Amara",
        middle_name: Some("Chioma"),
        last_name: "Nwosu",
        email: "amara.nwosu@example.com",
        phone: "+1 647 555 0456",
        kyc_status: KycStatus::Tier1Verified,
        dob: "1990-03-22",
        address: "456 Bloor St W, Toronto, ON M5S 1X8, Canada",
    },
    Person {
        id: "3",
        first_name: "Oluwaseun",
        middle_name: Some("Tunde"),
        last_name: "Adeyemi",
        email: "seun.adeyemi@example.com",
        phone: "+1 905 555 0789",
        kyc_status: KycStatus::AwaitingReview,
        dob: "1988-11-08",
        address: "78 King St E, Mississauga, ON L5A 1B2, Canada",
    },
    Person {
        id: "4",
        first_name: "Ngozi",
        middle_name: None,
        last_name: "Eze",
        email: "ngozi.eze@example.com",
        phone: "+1 514 555 0321",
        kyc_status: KycStatus::Unverified,
        dob: "1992-07-14",
        address: "12 Rue Sainte-Catherine, Montreal, QC H2X 1Y4, Canada",
    },
];

/// Users as shown in the list view.
pub fn users() -> Vec<User> {
    PEOPLE
        .iter()
        .map(|p| User {
            id: p.id.to_string(),
            first_name: p.first_name.to_string(),
            last_name: p.last_name.to_string(),
            middle_name: None,
            email: p.email.to_string(),
            phone: Some(p.phone.to_string()),
            country: Some("Canada".to_string()),
            kyc_status: p.kyc_status,
            account_status: None,
            dob: None,
            address: None,
        })
        .collect()
}

/// Users with the extra fields of the detail view.
pub fn user_details() -> Vec<User> {
    PEOPLE
        .iter()
        .zip(users())
        .map(|(p, user)| User {
            middle_name: p.middle_name.map(str::to_string),
            account_status: Some(AccountStatus::Active),
            dob: Some(p.dob.to_string()),
            address: Some(p.address.to_string()),
            ..user
        })
        .collect()
}

pub fn businesses() -> Vec<Business> {
    [
        ("1", "Tech Solutions Ltd", "admin@techsolutions.com", "+234 803 456 7890", "Nigeria", KybStatus::Verified),
        ("2", "Global Innovations Inc", "contact@globalinnovations.com", "+234 805 123 4567", "Nigeria", KybStatus::Verified),
        ("3", "African Trade Partners", "business@africantrade.com", "+254 712 345 6789", "Kenya", KybStatus::AwaitingReview),
        ("4", "West Africa Commerce", "info@westafricacomm.com", "+233 546 123 4567", "Ghana", KybStatus::Unverified),
    ]
    .into_iter()
    .map(|(id, name, email, phone, country, kyb_status)| Business {
        id: id.to_string(),
        name: name.to_string(),
        email: email.to_string(),
        phone: Some(phone.to_string()),
        country: Some(country.to_string()),
        kyb_status,
        account_status: Some(AccountStatus::Active),
    })
    .collect()
}

pub fn virtual_accounts() -> Vec<VirtualAccount> {
    [
        ("1", "Chidi Okafor", "2023-05-15 09:30:00", "chidi.okafo@example.com", "+1 416 555 0123", "0X1234567890abcdef1234567890abcdef12348989", AccountStatus::Active),
        ("2", "Amara Nwosu", "2023-05-18 14:22:00", "amara.nwosu@example.com", "+1 647 555 0456", "0Xabcdef1234567890abcdef1234567890abcdef89", AccountStatus::Active),
        ("3", "Tech Solutions Ltd", "2023-05-20 11:15:00", "tech@techsolutions.ng", "+234 801 555 0789", "0X9876543210fedcba9876543210fedcba98765898", AccountStatus::Pending),
    ]
    .into_iter()
    .map(|(id, name, created, email, phone, wallet, status)| VirtualAccount {
        id: id.to_string(),
        account_name: name.to_string(),
        owned_by: name.to_string(),
        date_created: created.to_string(),
        email: email.to_string(),
        phone_number: phone.to_string(),
        settlement_wallet: wallet.to_string(),
        status,
    })
    .collect()
}

pub fn settlements() -> Vec<Settlement> {
    [
        ("1", "SET-001", "₦1,500,000", SettlementStatus::Completed, "2023-05-22", "Chidi Okafor"),
        ("2", "SET-002", "₦850,000", SettlementStatus::Pending, "2023-05-23", "Amara Nwosu"),
        ("3", "SET-003", "₦2,100,000", SettlementStatus::Processing, "2023-05-21", "Tech Solutions Ltd"),
    ]
    .into_iter()
    .map(|(id, reference, amount, status, date, beneficiary)| Settlement {
        id: id.to_string(),
        reference: reference.to_string(),
        amount: amount.to_string(),
        status,
        date: date.to_string(),
        beneficiary: beneficiary.to_string(),
    })
    .collect()
}

pub fn transactions() -> Vec<Transaction> {
    use TransactionStatus::*;
    use TransactionType::*;

    [
        ("123456", "chidi.okafo@example.com", Deposit, "1,000 CAD", "₦1,250,000", Completed, "2023-05-22"),
        ("123457", "amara.nwosu@example.com", Withdrawal, "500 CAD", "₦625,000", Pending, "2023-05-22"),
        ("123458", "seun.adeyemi@example.com", Transfer, "750 CAD", "₦937,500", Completed, "2023-05-21"),
        ("123459", "ngozi.eze@example.com", Deposit, "2,000 CAD", "₦2,500,000", Completed, "2023-05-21"),
        ("123460", "chidi.okafo@example.com", Withdrawal, "1,500 CAD", "₦1,875,000", Failed, "2023-05-20"),
        ("123461", "amara.nwosu@example.com", Transfer, "300 CAD", "₦375,000", Completed, "2023-05-20"),
    ]
    .into_iter()
    .map(|(id, user_email, kind, source, destination, status, date)| Transaction {
        id: id.to_string(),
        user_email: user_email.to_string(),
        kind,
        source_amount: source.to_string(),
        destination_amount: destination.to_string(),
        status,
        date: date.to_string(),
    })
    .collect()
}

pub fn agents() -> Vec<Agent> {
    vec![
        Agent {
            id: "1".to_string(),
            email: "agent1@example.com".to_string(),
            total_transactions: 245,
            total_volume_cad: 125_000.0,
            lifetime_earnings: 9_375.0,
            earnings_this_week: 450.0,
        },
        Agent {
            id: "2".to_string(),
            email: "agent2@example.com".to_string(),
            total_transactions: 189,
            total_volume_cad: 95_000.0,
            lifetime_earnings: 7_600.0,
            earnings_this_week: 320.0,
        },
    ]
}

pub fn agent_tiers() -> Vec<AgentTier> {
    [
        ("1", "Bronze Tier", 1_000.0, 5_000.0, 0.05),
        ("2", "Silver Tier", 5_001.0, 15_000.0, 0.08),
        ("3", "Gold Tier", 15_001.0, 50_000.0, 0.12),
    ]
    .into_iter()
    .map(|(id, name, min, max, commission)| AgentTier {
        id: id.to_string(),
        tier_name: name.to_string(),
        min_volume: min,
        max_volume: max,
        commission_per_cad: commission,
        duration: "1 year".to_string(),
        status: AccountStatus::Active,
    })
    .collect()
}

pub fn routes() -> Vec<CurrencyRoute> {
    [
        ("1", "CAD", "NGN", RouteStatus::Published, true, "IFX", "Flutterwave"),
        ("2", "NGN", "CAD", RouteStatus::Published, true, "Flutterwave", "IFX"),
        ("3", "USD", "NGN", RouteStatus::Published, true, "Stripe", "Flutterwave"),
        ("4", "GBP", "NGN", RouteStatus::Draft, false, "Wise", "Bank Transfer"),
    ]
    .into_iter()
    .map(|(id, source, destination, status, swap, payin, payout)| CurrencyRoute {
        id: id.to_string(),
        source_currency: source.to_string(),
        destination_currency: destination.to_string(),
        status,
        send_enabled: true,
        swap_enabled: swap,
        payin_partner: payin.to_string(),
        payout_partner: payout.to_string(),
    })
    .collect()
}

pub fn country_currencies() -> Vec<CountryCurrency> {
    [
        ("1", "Canada", "CAD", "IFX", "Flutterwave", AccountStatus::Active),
        ("2", "Nigeria", "NGN", "Flutterwave", "IFX", AccountStatus::Active),
        ("3", "Kenya", "KES", "Clear Junction", "Paystack", AccountStatus::Active),
        ("4", "Ghana", "GHS", "Flutterwave", "Bridge", AccountStatus::Inactive),
    ]
    .into_iter()
    .map(|(id, country, currency, payin, payout, status)| CountryCurrency {
        id: id.to_string(),
        country: country.to_string(),
        currency: currency.to_string(),
        payin_partner: payin.to_string(),
        payout_partner: payout.to_string(),
        status,
    })
    .collect()
}
