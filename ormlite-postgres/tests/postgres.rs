mod init;

#[cfg(test)]
mod tests {
    use super::init::init;
    use ormlite_core::Connection;
    use ormlite_postgres::{ConnectOptions, PostgresConnection};
    use ormlite_tests::{execute_tests, init_logs, silent_logs};
    use std::sync::Mutex;

    static MUTEX: Mutex<()> = Mutex::new(());

    #[test]
    fn postgres() {
        init_logs();
        let _guard = MUTEX.lock().unwrap();
        let (url, _container) = init();
        let error_msg = format!("Could not connect to `{url}`");
        let connection = PostgresConnection::connect(&url).expect(&error_msg);
        execute_tests(connection);
    }

    #[test]
    fn wrong_url() {
        silent_logs! {
            assert!(PostgresConnection::connect("mysql://some_url").is_err());
        }
    }

    #[test]
    fn connect_options() {
        let options = ConnectOptions::new("localhost", 5432, "postgres", "", "my db");
        assert_eq!(
            options.to_string(),
            "host=localhost port=5432 user=postgres password='' dbname='my db'"
        );
        let options =
            ConnectOptions::new("127.0.0.1", 5433, "it's", "a\\b", "testdb").connect_timeout(3);
        assert_eq!(
            options.to_string(),
            "host=127.0.0.1 port=5433 user='it\\'s' password='a\\\\b' dbname=testdb connect_timeout=3"
        );
    }
}
