//! Unit tests for the command layer
//!
//! The transactional paths are exercised against a real database in
//! tests/integration_commands.rs; these cover the command structs and the
//! registry wiring.

#[cfg(test)]
mod tests {
    use crate::handlers::{
        Commands, DepositCommand, ListTransactionsCommand, RegisterAccountCommand,
        RegisterPersonCommand, WithdrawCommand,
    };
    use chrono::{NaiveDate, TimeZone, Utc};
    use sqlx::postgres::PgPoolOptions;

    #[test]
    fn test_register_person_command() {
        let born_at = NaiveDate::from_ymd_opt(1985, 11, 2).unwrap();
        let cmd = RegisterPersonCommand::new("Grace Hopper", "987.654.321-00", born_at);

        assert_eq!(cmd.name, "Grace Hopper");
        assert_eq!(cmd.cpf, "987.654.321-00");
        assert_eq!(cmd.born_at, born_at);
    }

    #[test]
    fn test_register_account_command() {
        let cmd = RegisterAccountCommand::new(9, 1);

        assert_eq!(cmd.person_id, 9);
        assert_eq!(cmd.type_id, 1);
    }

    #[test]
    fn test_deposit_command_keeps_the_raw_amount() {
        let cmd = DepositCommand::new(3, "30.50");

        assert_eq!(cmd.account_id, 3);
        assert_eq!(cmd.amount, "30.50");
    }

    #[test]
    fn test_withdraw_command_keeps_the_raw_amount() {
        let cmd = WithdrawCommand::new(3, "11.01");

        assert_eq!(cmd.account_id, 3);
        assert_eq!(cmd.amount, "11.01");
    }

    #[test]
    fn test_list_transactions_command_defaults_to_open_ended() {
        let since = Utc.with_ymd_and_hms(2024, 5, 1, 0, 0, 0).unwrap();
        let cmd = ListTransactionsCommand::new(3, since);

        assert_eq!(cmd.account_id, 3);
        assert_eq!(cmd.since, since);
        assert!(cmd.until.is_none());
    }

    #[test]
    fn test_list_transactions_command_with_until() {
        let since = Utc.with_ymd_and_hms(2024, 5, 1, 0, 0, 0).unwrap();
        let until = Utc.with_ymd_and_hms(2024, 5, 2, 0, 0, 0).unwrap();
        let cmd = ListTransactionsCommand::new(3, since).with_until(until);

        assert_eq!(cmd.until, Some(until));
    }

    #[tokio::test]
    async fn test_commands_registry_builds_without_connecting() {
        // connect_lazy defers the connection, so wiring is testable offline
        let pool = PgPoolOptions::new()
            .connect_lazy("postgres://localhost/teller_test")
            .unwrap();

        let _commands = Commands::new(pool);
    }
}
