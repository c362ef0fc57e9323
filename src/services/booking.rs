use crate::errors::AppError;
use crate::models::{ChatResponse, Intent, Lead};
use crate::storage::LeadStore;

const LABEL_NAME: &str = "nume";
const LABEL_PHONE: &str = "telefon";
const LABEL_SERVICE: &str = "serviciu dorit";

fn present(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}

/// Either asks for the missing booking fields or persists the lead and confirms.
pub fn complete_booking(
    store: &dyn LeadStore,
    name: Option<&str>,
    phone: Option<&str>,
    service: Option<&str>,
) -> Result<ChatResponse, AppError> {
    let (name, phone, service) = match (present(name), present(phone), present(service)) {
        (Some(name), Some(phone), Some(service)) => (name, phone, service),
        (name, phone, service) => {
            let missing: Vec<String> = [
                (LABEL_NAME, name),
                (LABEL_PHONE, phone),
                (LABEL_SERVICE, service),
            ]
            .into_iter()
            .filter(|(_, value)| value.is_none())
            .map(|(label, _)| label.to_string())
            .collect();

            let reply = format!(
                "Hai să setăm programarea. Am nevoie de următoarele informații: {}.",
                missing.join(", ")
            );
            return Ok(ChatResponse {
                reply,
                intent: Intent::Booking,
                requested_fields: missing,
            });
        }
    };

    let lead = Lead::new(name, phone, service);
    let reply = format!(
        "Mulțumim! Am înregistrat programarea pentru serviciul {} pe numele {}. Te vom contacta la {}.",
        lead.service, lead.name, lead.phone
    );

    tracing::info!(service = %lead.service, "booking completed");
    store.append(lead)?;

    Ok(ChatResponse::new(reply, Intent::Booking))
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use super::*;
    use crate::storage::StorageError;

    #[derive(Default)]
    struct RecordingStore {
        appended: Mutex<Vec<Lead>>,
    }

    impl LeadStore for RecordingStore {
        fn append(&self, lead: Lead) -> Result<(), StorageError> {
            self.appended.lock().unwrap().push(lead);
            Ok(())
        }

        fn load_all(&self) -> Result<Vec<Lead>, StorageError> {
            Ok(self.appended.lock().unwrap().clone())
        }
    }

    struct CorruptStore;

    impl LeadStore for CorruptStore {
        fn append(&self, _lead: Lead) -> Result<(), StorageError> {
            Err(StorageError::CorruptStore {
                path: "leads.json".into(),
                source: serde_json::from_str::<Vec<Lead>>("{").unwrap_err(),
            })
        }

        fn load_all(&self) -> Result<Vec<Lead>, StorageError> {
            Ok(Vec::new())
        }
    }

    #[test]
    fn test_nothing_supplied_asks_for_all_fields() {
        let store = RecordingStore::default();
        let res = complete_booking(&store, None, None, None).unwrap();

        assert_eq!(res.intent, Intent::Booking);
        assert_eq!(res.requested_fields, vec!["nume", "telefon", "serviciu dorit"]);
        assert_eq!(
            res.reply,
            "Hai să setăm programarea. Am nevoie de următoarele informații: nume, telefon, serviciu dorit."
        );
        assert!(store.appended.lock().unwrap().is_empty());
    }

    #[test]
    fn test_single_missing_field() {
        let store = RecordingStore::default();
        let res = complete_booking(&store, Some("Ana"), Some(""), Some("tuns")).unwrap();

        assert_eq!(res.requested_fields, vec!["telefon"]);
        assert!(store.appended.lock().unwrap().is_empty());
    }

    #[test]
    fn test_whitespace_counts_as_missing() {
        let store = RecordingStore::default();
        let res = complete_booking(&store, Some("  "), Some("0722111222"), Some("\t")).unwrap();

        assert_eq!(res.requested_fields, vec!["nume", "serviciu dorit"]);
    }

    #[test]
    fn test_complete_booking_persists_once() {
        let store = RecordingStore::default();
        let before = chrono::Utc::now().naive_utc();
        let res = complete_booking(&store, Some("Ana"), Some("0722111222"), Some("tuns")).unwrap();

        assert_eq!(res.intent, Intent::Booking);
        assert!(res.requested_fields.is_empty());
        assert_eq!(
            res.reply,
            "Mulțumim! Am înregistrat programarea pentru serviciul tuns pe numele Ana. Te vom contacta la 0722111222."
        );

        let appended = store.appended.lock().unwrap();
        assert_eq!(appended.len(), 1);
        assert_eq!(appended[0].name, "Ana");
        assert_eq!(appended[0].phone, "0722111222");
        assert_eq!(appended[0].service, "tuns");
        assert!(appended[0].created_at >= before);
    }

    #[test]
    fn test_values_are_stored_verbatim() {
        let store = RecordingStore::default();
        complete_booking(&store, Some(" Ana "), Some("0722 111 222"), Some("tuns")).unwrap();

        let appended = store.appended.lock().unwrap();
        assert_eq!(appended[0].name, " Ana ");
        assert_eq!(appended[0].phone, "0722 111 222");
    }

    #[test]
    fn test_store_failure_propagates() {
        let err = complete_booking(&CorruptStore, Some("Ana"), Some("0722111222"), Some("tuns"))
            .unwrap_err();
        assert!(matches!(
            err,
            AppError::Storage(StorageError::CorruptStore { .. })
        ));
    }
}
