//! Static text shown around the recommendations. Not derived from data.

pub const TITLE: &str = "Personalized Contraceptive Care Advisor";

pub const WELCOME: &str = "Welcome to your personalized contraceptive care journey! \
This application helps you explore suitable contraceptive options based on your unique \
medical profile. Let's find the best method for you.";

pub const SOURCE_NAME: &str =
    "Summary Chart of U.S. Medical Eligibility Criteria for Contraceptive Use";

pub const SOURCE_URL: &str = "https://www.cdc.gov/reproductivehealth/contraception/pdf/summary-chart-us-medical-eligibility-criteria_508tagged.pdf";

pub const DISCLAIMER: &str = "This tool provides general guidance based on medical \
conditions. It's crucial to consult with a healthcare professional for personalized \
advice tailored to your individual health needs and circumstances.";

pub const GUIDANCE_URL: &str =
    "https://www.cdc.gov/reproductivehealth/contraception/contraception_guidance.htm";
