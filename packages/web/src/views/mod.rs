mod sign_in;
pub use sign_in::SignIn;

mod welcome;
pub use welcome::Welcome;
