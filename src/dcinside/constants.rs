/// Hands out the server-side date we must hash to prove we're the mobile app.
pub const APP_CHECK_ENDPOINT: &str = "https://json2.dcinside.com/json0/app_check_A_rina_one_new.php";

/// Exchanges our value token (and app identity) for an app ID.
pub const APP_VERIFICATION_ENDPOINT: &str =
    "https://msign.dcinside.com/auth/mobile_app_verification";

/// The mobile app identifies itself with this exact user agent.
pub const USER_AGENT: &str = "dcinside.app";

/// Similarly, every request from the app carries this referer.
pub const REFERER: &str = "http://www.dcinside.com";

/// Prefixed to the app check date before hashing.
pub const VALUE_TOKEN_PREFIX: &str = "dcArdchk_";

/// The signing certificate hash of the official Android app.
pub const APP_SIGNATURE: &str = "ReOo4u96nnv8Njd7707KpYiIVYQ3FlcKHDJE046Pg6s=";

pub const APP_PACKAGE: &str = "com.dcinside.app.android";
pub const APP_VERSION_CODE: &str = "100500";
pub const APP_VERSION_NAME: &str = "5.0.0";

/// Nickname used by anonymous ("유동") posters.
pub const ANONYMOUS_NICKNAME: &str = "ㅇㅇ";

/// Placeholder passphrase for the anonymous session.
/// The remote service never validates it while obtaining an app ID.
pub const ANONYMOUS_PASSWORD: &str = "1234";
