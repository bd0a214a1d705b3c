use clap::Subcommand;

#[derive(Subcommand, Debug, PartialEq)]
pub(crate) enum Commands {
    /// Bootstrap the client identity and print the auth state
    Status,

    /// Request a verification code for a phone number
    ///
    /// The re-request countdown is only enforced within a single run;
    /// `retryAfterSecs` in the output is informational.
    SendCode {
        /// 11-digit mainland mobile number
        phone: String,
    },

    /// Verify a code and log the user in
    Login {
        phone: String,

        /// Code received by SMS
        #[arg(long)]
        code: String,

        /// Passed through to the session service unchanged
        #[arg(long, default_value = "")]
        iv: String,
    },

    /// Forget the logged-in user (the client identity is kept)
    Logout,

    /// Look up the web bundle version for the current identity
    WebVersion {
        /// Overrides the configured environment name
        #[arg(long)]
        env: Option<String>,
    },
}
