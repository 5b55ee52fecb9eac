use contracts::domain::a001_seller_account::aggregate::SellerAccount;

use crate::shared::store::snapshot::RecordSnapshot;

/// All selectable accounts: the built-in default first, then every account
/// registered in the store. The sync job processes them in the same order.
pub fn list_all(snapshot: &RecordSnapshot) -> Vec<SellerAccount> {
    let mut accounts = Vec::with_capacity(snapshot.accounts.len() + 1);
    accounts.push(SellerAccount::default_account());
    accounts.extend(snapshot.accounts.iter().cloned());
    accounts
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_account_always_listed_first() {
        let snapshot = RecordSnapshot::default();
        let accounts = list_all(&snapshot);
        assert_eq!(accounts.len(), 1);
        assert_eq!(accounts[0].id, "default_hidden_account");

        let snapshot = RecordSnapshot {
            accounts: vec![SellerAccount {
                id: "acc_1".to_string(),
                name: "EU Storefront".to_string(),
                ..Default::default()
            }],
            ..Default::default()
        };
        let accounts = list_all(&snapshot);
        assert_eq!(accounts.len(), 2);
        assert_eq!(accounts[1].id, "acc_1");
    }
}
