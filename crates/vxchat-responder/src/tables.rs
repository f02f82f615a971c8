// SPDX-FileCopyrightText: 2026 VxChat Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The two production rule tables.
//!
//! The stateless `/api/chat` endpoint and the history-backed
//! `/api/chatbot/chat` endpoint carry different, overlapping tables with
//! different coverage. They are deliberately kept separate: merging them
//! would silently change which reply wins for messages matching both.

use crate::rule::{Fallback, Rule, RuleTable};

const BOOKING: &str = "I can help you book an appointment! What type of service do you need? \
     We offer oil changes, brake services, tire rotations, and more.";

const STATUS: &str = "I'll help you check your appointment status. Could you please provide \
     your appointment ID or registration number?";

const SERVICES: &str = "We offer a wide range of services including:\n\
     • Regular Maintenance (Oil Change, Filter Replacement)\n\
     • Brake Services\n\
     • Tire Services\n\
     • Engine Diagnostics\n\
     • AC Services\n\
     Would you like to know more about any specific service?";

const CANCEL: &str = "I understand you want to cancel an appointment. Please provide your \
     appointment ID, and I'll help you with the cancellation process.";

const RESCHEDULE: &str = "I can help you reschedule your appointment. Please provide your \
     appointment ID and the new preferred date and time.";

const SUPPORT: &str = "I'm here to help! You can:\n\
     • Book a new appointment\n\
     • Check appointment status\n\
     • View our services\n\
     • Reschedule or cancel appointments\n\
     What would you like assistance with?";

const HOURS: &str = "We're open Monday to Saturday, 8:00 AM to 6:00 PM. \
     We're closed on Sundays and public holidays.";

const LOCATION: &str = "We're located at 123 Service Street, City Center. \
     You can find us easily using Google Maps. Would you like directions?";

const PRICING: &str = "Our pricing varies by service. Could you let me know which specific \
     service you're interested in? I'll provide you with accurate pricing information.";

const GREETING: &str = "Hello! Welcome to VX Service. How can I assist you today?";

const THANKS: &str = "You're welcome! Is there anything else I can help you with?";

/// Rule table for the stateless `/api/chat` endpoint.
pub const SERVICE_DESK: RuleTable = RuleTable {
    name: "service-desk",
    rules: &[
        Rule { required: &["appointment", "book"], reply: BOOKING },
        Rule { required: &["appointment", "check"], reply: STATUS },
        Rule { required: &["services"], reply: SERVICES },
        Rule { required: &["service"], reply: SERVICES },
        Rule { required: &["cancel"], reply: CANCEL },
        Rule { required: &["reschedule"], reply: RESCHEDULE },
        Rule { required: &["support"], reply: SUPPORT },
        Rule { required: &["help"], reply: SUPPORT },
        Rule { required: &["hours"], reply: HOURS },
        Rule { required: &["timing"], reply: HOURS },
        Rule { required: &["location"], reply: LOCATION },
        Rule { required: &["address"], reply: LOCATION },
        Rule { required: &["price"], reply: PRICING },
        Rule { required: &["cost"], reply: PRICING },
        Rule { required: &["hello"], reply: GREETING },
        Rule { required: &["hi"], reply: GREETING },
        Rule { required: &["thank"], reply: THANKS },
    ],
    fallback: Fallback::Echo {
        prefix: "I understand you said: '",
        suffix: "'. I'm here to help with appointments, services, and general inquiries. \
             Could you please provide more details about what you need?",
    },
};

const WS_SERVICES: &str = "I can help you with our services! We offer vehicle maintenance, \
     repairs, and inspections. Would you like to book an appointment?";

const WS_PRICING: &str = "Our pricing varies based on the service. Please select a service \
     from the booking wizard to see detailed pricing.";

const WS_HOURS: &str =
    "We're open Monday-Friday: 8AM-6PM, Saturday: 9AM-4PM, and closed on Sundays.";

const WS_LOCATION: &str =
    "We're located at 123 Main Street. You can find directions in our contact section.";

const WS_MANAGE: &str = "You can manage your appointments from the 'My Appointments' page. \
     Need help with a specific appointment?";

const WS_GREETING: &str = "Hello! How can I assist you with your vehicle service needs today?";

const WS_THANKS: &str = "You're welcome! Feel free to ask if you need anything else.";

/// Rule table for the history-backed `/api/chatbot/chat` endpoint.
///
/// Note the coarser coverage: any message mentioning "appointment" hits
/// the services rule here, even "cancel my appointment".
pub const WORKSHOP: RuleTable = RuleTable {
    name: "workshop",
    rules: &[
        Rule { required: &["service"], reply: WS_SERVICES },
        Rule { required: &["appointment"], reply: WS_SERVICES },
        Rule { required: &["price"], reply: WS_PRICING },
        Rule { required: &["cost"], reply: WS_PRICING },
        Rule { required: &["hours"], reply: WS_HOURS },
        Rule { required: &["open"], reply: WS_HOURS },
        Rule { required: &["location"], reply: WS_LOCATION },
        Rule { required: &["where"], reply: WS_LOCATION },
        Rule { required: &["cancel"], reply: WS_MANAGE },
        Rule { required: &["reschedule"], reply: WS_MANAGE },
        Rule { required: &["hello"], reply: WS_GREETING },
        Rule { required: &["hi"], reply: WS_GREETING },
        Rule { required: &["thank"], reply: WS_THANKS },
    ],
    fallback: Fallback::Fixed(
        "I'm here to help! You can ask me about services, appointments, pricing, or hours. \
         What would you like to know?",
    ),
};
