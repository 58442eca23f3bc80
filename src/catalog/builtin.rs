//! Built-in descriptor set loaded at process start.
//!
//! Paths follow the upstream provider's REST conventions; `{Name}` segments
//! are placeholders substituted from the caller's parameter map at
//! invocation time.

use serde_json::json;

use super::{EndpointDescriptor, HttpMethod, ParamSpec, ParamType, Pricing};

fn param(name: &str, param_type: ParamType, description: &str) -> ParamSpec {
    ParamSpec {
        name: name.to_string(),
        param_type,
        description: description.to_string(),
        example: None,
    }
}

fn param_ex(
    name: &str,
    param_type: ParamType,
    description: &str,
    example: serde_json::Value,
) -> ParamSpec {
    ParamSpec {
        name: name.to_string(),
        param_type,
        description: description.to_string(),
        example: Some(example),
    }
}

fn price(cost: &str, unit: &str) -> Option<Pricing> {
    Some(Pricing {
        cost: cost.to_string(),
        unit: unit.to_string(),
    })
}

/// Return the built-in descriptors, in catalog order.
pub fn defaults() -> Vec<EndpointDescriptor> {
    vec![
        // --- Messaging ---
        EndpointDescriptor {
            id: "messaging-send-sms".to_string(),
            name: "Send SMS".to_string(),
            description: "Send an outbound SMS message to a single recipient".to_string(),
            method: HttpMethod::Post,
            path: "https://api.twilio.com/2010-04-01/Accounts/{AccountSid}/Messages.json"
                .to_string(),
            category: "messaging".to_string(),
            subcategory: "sms".to_string(),
            required_params: vec![
                param("AccountSid", ParamType::String, "Account identifier"),
                param_ex(
                    "To",
                    ParamType::String,
                    "Destination number in E.164 format",
                    json!("+18558600037"),
                ),
                param("From", ParamType::String, "A provisioned sender number"),
                param("Body", ParamType::String, "Message text, up to 1600 characters"),
            ],
            optional_params: vec![
                param("StatusCallback", ParamType::String, "Delivery status webhook URL"),
                param("MediaUrl", ParamType::Array, "URLs of media to attach (MMS)"),
            ],
            pricing: price("$0.0079", "per message"),
            response_example: Some(json!({
                "sid": "SM1a2b3c",
                "status": "queued",
                "to": "+18558600037",
                "direction": "outbound-api"
            })),
            documentation: Some("https://www.twilio.com/docs/sms/api/message-resource".to_string()),
        },
        EndpointDescriptor {
            id: "messaging-list-messages".to_string(),
            name: "List Messages".to_string(),
            description: "List messages sent from and received by the account".to_string(),
            method: HttpMethod::Get,
            path: "https://api.twilio.com/2010-04-01/Accounts/{AccountSid}/Messages.json"
                .to_string(),
            category: "messaging".to_string(),
            subcategory: "sms".to_string(),
            required_params: vec![param("AccountSid", ParamType::String, "Account identifier")],
            optional_params: vec![
                param("To", ParamType::String, "Filter by destination number"),
                param("DateSent", ParamType::Date, "Filter by send date (YYYY-MM-DD)"),
                param("PageSize", ParamType::Integer, "Results per page, max 1000"),
            ],
            pricing: None,
            response_example: Some(json!({"messages": [], "page_size": 50})),
            documentation: Some("https://www.twilio.com/docs/sms/api/message-resource".to_string()),
        },
        EndpointDescriptor {
            id: "messaging-fetch-message".to_string(),
            name: "Fetch Message".to_string(),
            description: "Fetch a single message by its identifier".to_string(),
            method: HttpMethod::Get,
            path:
                "https://api.twilio.com/2010-04-01/Accounts/{AccountSid}/Messages/{MessageSid}.json"
                    .to_string(),
            category: "messaging".to_string(),
            subcategory: "sms".to_string(),
            required_params: vec![
                param("AccountSid", ParamType::String, "Account identifier"),
                param("MessageSid", ParamType::String, "Message identifier"),
            ],
            optional_params: vec![],
            pricing: None,
            response_example: None,
            documentation: None,
        },
        EndpointDescriptor {
            id: "messaging-delete-message".to_string(),
            name: "Delete Message".to_string(),
            description: "Delete a message record from the account history".to_string(),
            method: HttpMethod::Delete,
            path:
                "https://api.twilio.com/2010-04-01/Accounts/{AccountSid}/Messages/{MessageSid}.json"
                    .to_string(),
            category: "messaging".to_string(),
            subcategory: "sms".to_string(),
            required_params: vec![
                param("AccountSid", ParamType::String, "Account identifier"),
                param("MessageSid", ParamType::String, "Message identifier"),
            ],
            optional_params: vec![],
            pricing: None,
            response_example: None,
            documentation: None,
        },
        EndpointDescriptor {
            id: "messaging-send-whatsapp".to_string(),
            name: "Send WhatsApp Message".to_string(),
            description: "Send a WhatsApp message through an approved sender".to_string(),
            method: HttpMethod::Post,
            path: "https://api.twilio.com/2010-04-01/Accounts/{AccountSid}/Messages.json"
                .to_string(),
            category: "messaging".to_string(),
            subcategory: "whatsapp".to_string(),
            required_params: vec![
                param("AccountSid", ParamType::String, "Account identifier"),
                param_ex(
                    "To",
                    ParamType::String,
                    "Recipient, prefixed with whatsapp:",
                    json!("whatsapp:+15005550006"),
                ),
                param("From", ParamType::String, "Approved WhatsApp sender"),
                param("Body", ParamType::String, "Message text or template body"),
            ],
            optional_params: vec![param(
                "ContentSid",
                ParamType::String,
                "Pre-approved template identifier",
            )],
            pricing: price("$0.005", "per message"),
            response_example: None,
            documentation: Some("https://www.twilio.com/docs/whatsapp/api".to_string()),
        },
        // --- Voice ---
        EndpointDescriptor {
            id: "voice-create-call".to_string(),
            name: "Create Call".to_string(),
            description: "Place an outbound voice call and drive it with instructions".to_string(),
            method: HttpMethod::Post,
            path: "https://api.twilio.com/2010-04-01/Accounts/{AccountSid}/Calls.json".to_string(),
            category: "voice".to_string(),
            subcategory: "calls".to_string(),
            required_params: vec![
                param("AccountSid", ParamType::String, "Account identifier"),
                param("To", ParamType::String, "Number to call, E.164 format"),
                param("From", ParamType::String, "Caller ID, a provisioned number"),
                param("Url", ParamType::String, "Webhook returning call instructions"),
            ],
            optional_params: vec![
                param("Timeout", ParamType::Integer, "Seconds to wait for an answer"),
                param("Record", ParamType::Boolean, "Record the call audio"),
            ],
            pricing: price("$0.0140", "per minute"),
            response_example: Some(json!({"sid": "CA9e8f7d", "status": "queued"})),
            documentation: Some("https://www.twilio.com/docs/voice/api/call-resource".to_string()),
        },
        EndpointDescriptor {
            id: "voice-list-calls".to_string(),
            name: "List Calls".to_string(),
            description: "List calls made to and from the account".to_string(),
            method: HttpMethod::Get,
            path: "https://api.twilio.com/2010-04-01/Accounts/{AccountSid}/Calls.json".to_string(),
            category: "voice".to_string(),
            subcategory: "calls".to_string(),
            required_params: vec![param("AccountSid", ParamType::String, "Account identifier")],
            optional_params: vec![
                param("Status", ParamType::String, "Filter by call status"),
                param("StartTime", ParamType::Date, "Filter by start date"),
            ],
            pricing: None,
            response_example: None,
            documentation: None,
        },
        EndpointDescriptor {
            id: "voice-fetch-call".to_string(),
            name: "Fetch Call".to_string(),
            description: "Fetch a single call with its final status and duration".to_string(),
            method: HttpMethod::Get,
            path: "https://api.twilio.com/2010-04-01/Accounts/{AccountSid}/Calls/{CallSid}.json"
                .to_string(),
            category: "voice".to_string(),
            subcategory: "calls".to_string(),
            required_params: vec![
                param("AccountSid", ParamType::String, "Account identifier"),
                param("CallSid", ParamType::String, "Call identifier"),
            ],
            optional_params: vec![],
            pricing: None,
            response_example: None,
            documentation: None,
        },
        EndpointDescriptor {
            id: "voice-list-recordings".to_string(),
            name: "List Recordings".to_string(),
            description: "List call recordings stored on the account".to_string(),
            method: HttpMethod::Get,
            path: "https://api.twilio.com/2010-04-01/Accounts/{AccountSid}/Recordings.json"
                .to_string(),
            category: "voice".to_string(),
            subcategory: "recordings".to_string(),
            required_params: vec![param("AccountSid", ParamType::String, "Account identifier")],
            optional_params: vec![param("CallSid", ParamType::String, "Filter by originating call")],
            pricing: price("$0.0005", "per minute stored"),
            response_example: None,
            documentation: None,
        },
        EndpointDescriptor {
            id: "voice-delete-recording".to_string(),
            name: "Delete Recording".to_string(),
            description: "Permanently delete a call recording".to_string(),
            method: HttpMethod::Delete,
            path:
                "https://api.twilio.com/2010-04-01/Accounts/{AccountSid}/Recordings/{RecordingSid}.json"
                    .to_string(),
            category: "voice".to_string(),
            subcategory: "recordings".to_string(),
            required_params: vec![
                param("AccountSid", ParamType::String, "Account identifier"),
                param("RecordingSid", ParamType::String, "Recording identifier"),
            ],
            optional_params: vec![],
            pricing: None,
            response_example: None,
            documentation: None,
        },
        // --- Verify ---
        EndpointDescriptor {
            id: "verify-start-verification".to_string(),
            name: "Start Verification".to_string(),
            description: "Send a one-time passcode to a phone number or email".to_string(),
            method: HttpMethod::Post,
            path: "https://verify.twilio.com/v2/Services/{ServiceSid}/Verifications".to_string(),
            category: "verify".to_string(),
            subcategory: "otp".to_string(),
            required_params: vec![
                param("ServiceSid", ParamType::String, "Verify service identifier"),
                param("To", ParamType::String, "Destination number or email"),
                param_ex(
                    "Channel",
                    ParamType::String,
                    "Delivery channel: sms, call, or email",
                    json!("sms"),
                ),
            ],
            optional_params: vec![param("Locale", ParamType::String, "Message language code")],
            pricing: price("$0.05", "per verification"),
            response_example: Some(json!({"sid": "VE1f2e3d", "status": "pending"})),
            documentation: Some("https://www.twilio.com/docs/verify/api/verification".to_string()),
        },
        EndpointDescriptor {
            id: "verify-check-verification".to_string(),
            name: "Check Verification".to_string(),
            description: "Check a one-time passcode supplied by the user".to_string(),
            method: HttpMethod::Post,
            path: "https://verify.twilio.com/v2/Services/{ServiceSid}/VerificationCheck"
                .to_string(),
            category: "verify".to_string(),
            subcategory: "checks".to_string(),
            required_params: vec![
                param("ServiceSid", ParamType::String, "Verify service identifier"),
                param("To", ParamType::String, "Number or email the code was sent to"),
                param("Code", ParamType::String, "The passcode entered by the user"),
            ],
            optional_params: vec![],
            pricing: None,
            response_example: Some(json!({"status": "approved", "valid": true})),
            documentation: None,
        },
        EndpointDescriptor {
            id: "verify-fetch-service".to_string(),
            name: "Fetch Verify Service".to_string(),
            description: "Fetch the configuration of a verification service".to_string(),
            method: HttpMethod::Get,
            path: "https://verify.twilio.com/v2/Services/{ServiceSid}".to_string(),
            category: "verify".to_string(),
            subcategory: "otp".to_string(),
            required_params: vec![param(
                "ServiceSid",
                ParamType::String,
                "Verify service identifier",
            )],
            optional_params: vec![],
            pricing: None,
            response_example: None,
            documentation: None,
        },
        // --- Lookup ---
        EndpointDescriptor {
            id: "lookup-number".to_string(),
            name: "Lookup Phone Number".to_string(),
            description: "Validate a phone number and fetch its formatting details".to_string(),
            method: HttpMethod::Get,
            path: "https://lookups.twilio.com/v2/PhoneNumbers/{PhoneNumber}".to_string(),
            category: "lookup".to_string(),
            subcategory: "line-type".to_string(),
            required_params: vec![param_ex(
                "PhoneNumber",
                ParamType::String,
                "Number to look up, E.164 format",
                json!("+14155552671"),
            )],
            optional_params: vec![param(
                "Fields",
                ParamType::String,
                "Comma-separated data packages to include",
            )],
            pricing: price("$0.008", "per lookup"),
            response_example: Some(json!({
                "phone_number": "+14155552671",
                "valid": true,
                "line_type_intelligence": {"type": "mobile"}
            })),
            documentation: Some("https://www.twilio.com/docs/lookup/v2-api".to_string()),
        },
        EndpointDescriptor {
            id: "lookup-carrier".to_string(),
            name: "Lookup Carrier".to_string(),
            description: "Fetch carrier and caller-name data for a number".to_string(),
            method: HttpMethod::Get,
            path: "https://lookups.twilio.com/v2/PhoneNumbers/{PhoneNumber}".to_string(),
            category: "lookup".to_string(),
            subcategory: "carrier".to_string(),
            required_params: vec![param(
                "PhoneNumber",
                ParamType::String,
                "Number to look up, E.164 format",
            )],
            optional_params: vec![param(
                "Fields",
                ParamType::String,
                "Set to caller_name,line_type_intelligence",
            )],
            pricing: price("$0.01", "per lookup"),
            response_example: None,
            documentation: None,
        },
        // --- Video ---
        EndpointDescriptor {
            id: "video-create-room".to_string(),
            name: "Create Video Room".to_string(),
            description: "Create a video room for multi-party sessions".to_string(),
            method: HttpMethod::Post,
            path: "https://video.twilio.com/v1/Rooms".to_string(),
            category: "video".to_string(),
            subcategory: "rooms".to_string(),
            required_params: vec![param(
                "UniqueName",
                ParamType::String,
                "Room name, unique within the account",
            )],
            optional_params: vec![
                param("Type", ParamType::String, "Room topology: go, peer-to-peer, group"),
                param("MaxParticipants", ParamType::Integer, "Participant cap, up to 50"),
                param("RecordParticipantsOnConnect", ParamType::Boolean, "Record on join"),
            ],
            pricing: price("$0.004", "per participant minute"),
            response_example: Some(json!({"sid": "RM4c5d6e", "status": "in-progress"})),
            documentation: Some("https://www.twilio.com/docs/video/api/rooms-resource".to_string()),
        },
        EndpointDescriptor {
            id: "video-complete-room".to_string(),
            name: "Complete Video Room".to_string(),
            description: "End an in-progress room and disconnect its participants".to_string(),
            method: HttpMethod::Post,
            path: "https://video.twilio.com/v1/Rooms/{RoomSid}".to_string(),
            category: "video".to_string(),
            subcategory: "rooms".to_string(),
            required_params: vec![
                param("RoomSid", ParamType::String, "Room identifier"),
                param_ex("Status", ParamType::String, "Must be completed", json!("completed")),
            ],
            optional_params: vec![],
            pricing: None,
            response_example: None,
            documentation: None,
        },
        EndpointDescriptor {
            id: "video-list-participants".to_string(),
            name: "List Room Participants".to_string(),
            description: "List the participants connected to a room".to_string(),
            method: HttpMethod::Get,
            path: "https://video.twilio.com/v1/Rooms/{RoomSid}/Participants".to_string(),
            category: "video".to_string(),
            subcategory: "participants".to_string(),
            required_params: vec![param("RoomSid", ParamType::String, "Room identifier")],
            optional_params: vec![param("Status", ParamType::String, "connected or disconnected")],
            pricing: None,
            response_example: None,
            documentation: None,
        },
        // --- Billing communications ---
        EndpointDescriptor {
            id: "billing-send-receipt".to_string(),
            name: "Send Payment Receipt".to_string(),
            description: "Send a payment receipt SMS to a member after a charge".to_string(),
            method: HttpMethod::Post,
            path: "https://api.twilio.com/2010-04-01/Accounts/{AccountSid}/Messages.json"
                .to_string(),
            category: "billing-communications".to_string(),
            subcategory: "receipts".to_string(),
            required_params: vec![
                param("AccountSid", ParamType::String, "Account identifier"),
                param("To", ParamType::String, "Member's phone number"),
                param("From", ParamType::String, "Billing sender number"),
                param_ex(
                    "Body",
                    ParamType::String,
                    "Receipt text with amount and date",
                    json!("Payment of $49.00 received. Thank you!"),
                ),
            ],
            optional_params: vec![],
            pricing: price("$0.0079", "per message"),
            response_example: None,
            documentation: None,
        },
        EndpointDescriptor {
            id: "billing-send-dunning-notice".to_string(),
            name: "Send Dunning Notice".to_string(),
            description: "Send a failed-payment notice with a retry link".to_string(),
            method: HttpMethod::Post,
            path: "https://api.twilio.com/2010-04-01/Accounts/{AccountSid}/Messages.json"
                .to_string(),
            category: "billing-communications".to_string(),
            subcategory: "dunning".to_string(),
            required_params: vec![
                param("AccountSid", ParamType::String, "Account identifier"),
                param("To", ParamType::String, "Member's phone number"),
                param("From", ParamType::String, "Billing sender number"),
                param("Body", ParamType::String, "Notice text including the retry URL"),
            ],
            optional_params: vec![param(
                "StatusCallback",
                ParamType::String,
                "Delivery status webhook URL",
            )],
            pricing: price("$0.0079", "per message"),
            response_example: None,
            documentation: None,
        },
        EndpointDescriptor {
            id: "billing-schedule-statement".to_string(),
            name: "Schedule Statement Message".to_string(),
            description: "Schedule a monthly statement notification for later delivery".to_string(),
            method: HttpMethod::Post,
            path: "https://api.twilio.com/2010-04-01/Accounts/{AccountSid}/Messages.json"
                .to_string(),
            category: "billing-communications".to_string(),
            subcategory: "statements".to_string(),
            required_params: vec![
                param("AccountSid", ParamType::String, "Account identifier"),
                param("To", ParamType::String, "Member's phone number"),
                param("MessagingServiceSid", ParamType::String, "Messaging service to send from"),
                param("Body", ParamType::String, "Statement summary text"),
                param_ex(
                    "SendAt",
                    ParamType::Date,
                    "Delivery time, ISO 8601, 15min-7days out",
                    json!("2025-11-01T09:00:00Z"),
                ),
            ],
            optional_params: vec![param_ex(
                "ScheduleType",
                ParamType::String,
                "Must be fixed",
                json!("fixed"),
            )],
            pricing: None,
            response_example: Some(json!({"sid": "SM7g8h9i", "status": "scheduled"})),
            documentation: None,
        },
        EndpointDescriptor {
            id: "billing-list-notices".to_string(),
            name: "List Billing Notices".to_string(),
            description: "List billing messages sent through the billing sender".to_string(),
            method: HttpMethod::Get,
            path: "https://api.twilio.com/2010-04-01/Accounts/{AccountSid}/Messages.json"
                .to_string(),
            category: "billing-communications".to_string(),
            subcategory: "statements".to_string(),
            required_params: vec![param("AccountSid", ParamType::String, "Account identifier")],
            optional_params: vec![
                param("From", ParamType::String, "Restrict to the billing sender number"),
                param("DateSent", ParamType::Date, "Filter by send date"),
            ],
            pricing: None,
            response_example: None,
            documentation: None,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_ids_are_unique() {
        let all = defaults();
        let mut ids: Vec<_> = all.iter().map(|e| e.id.as_str()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), all.len());
    }

    #[test]
    fn test_required_param_names_unique_within_descriptor() {
        for entry in defaults() {
            let mut names: Vec<_> = entry.required_params.iter().map(|p| p.name.as_str()).collect();
            names.sort_unstable();
            let before = names.len();
            names.dedup();
            assert_eq!(names.len(), before, "duplicate required param in '{}'", entry.id);
            assert!(
                entry.required_params.iter().all(|p| !p.name.is_empty()),
                "empty required param name in '{}'",
                entry.id
            );
        }
    }

    #[test]
    fn test_all_builtins_have_absolute_paths() {
        assert!(defaults().iter().all(|e| e.path.starts_with("https://")));
    }
}
