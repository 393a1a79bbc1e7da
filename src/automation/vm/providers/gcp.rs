use super::CloudProvider;
use crate::automation::vm::{ProviderCommand, ProviderKind};
use crate::config::validator::{check_lowercase_name, check_required};
use crate::config::{ConfigDocument, ValidationResult};

const BASE_COMMAND: &str = "gcloud compute instances create";
const TRAILING_FLAGS: &str = "--subnet=default";
const IDENTITY_COMMAND: &str = "gcloud config get-value account";

const REQUIRED_FIELDS: &[&str] = &["name", "image", "imageproject", "zone"];

const DOCUMENTED_FIELDS: &[&str] = &[
    "name",
    "project",
    "purpose",
    "team",
    "os",
    "image",
    "zone",
    "imageproject",
];

#[derive(Default)]
pub struct GcpProvider;

impl GcpProvider {
    pub fn new() -> Self {
        Self
    }
}

impl CloudProvider for GcpProvider {
    fn kind(&self) -> ProviderKind {
        ProviderKind::Gcp
    }

    fn base_command(&self) -> &'static str {
        BASE_COMMAND
    }

    fn required_fields(&self) -> &'static [&'static str] {
        REQUIRED_FIELDS
    }

    fn documented_fields(&self) -> &'static [&'static str] {
        DOCUMENTED_FIELDS
    }

    fn identity_command(&self) -> &'static str {
        IDENTITY_COMMAND
    }

    fn validate(&self, document: &ConfigDocument) -> ValidationResult {
        for (i, record) in document.records().iter().enumerate() {
            check_required(record, i + 1, self.required_fields())?;
            check_lowercase_name(record, i + 1)?;
        }
        Ok(())
    }

    // Arguments follow the record's own line order.
    fn build_commands(&self, document: &ConfigDocument) -> Vec<ProviderCommand> {
        document
            .records()
            .iter()
            .map(|record| {
                let mut command = String::from(self.base_command());
                for (key, value) in record.fields() {
                    match key {
                        "name" => command.push_str(&format!(" {value}")),
                        "imageproject" => command.push_str(&format!(" --image-project {value}")),
                        "image" | "zone" => command.push_str(&format!(" --{key} {value}")),
                        _ => {}
                    }
                }
                command.push(' ');
                command.push_str(TRAILING_FLAGS);
                ProviderCommand::gcp(command)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{parse_document, ValidationError, ValidationReason};

    const VALID: &str = "[web]\nname = web1\nimage = debian-12\nimageproject = debian-cloud\nzone = us-east1-b\n";

    #[test]
    fn test_valid_instance_builds_expected_command() {
        let provider = GcpProvider::new();
        let doc = parse_document(VALID);

        assert!(provider.validate(&doc).is_ok());
        let commands = provider.build_commands(&doc);
        assert_eq!(
            commands[0].command,
            "gcloud compute instances create web1 --image debian-12 \
             --image-project debian-cloud --zone us-east1-b --subnet=default"
        );
        assert_eq!(commands[0].windows_os, None);
    }

    #[test]
    fn test_arguments_follow_line_order() {
        let doc = parse_document("[web]\nzone = z1\nimageproject = p\nteam = ops\nname = n1\nimage = i\n");
        let commands = GcpProvider::new().build_commands(&doc);
        assert_eq!(
            commands[0].command,
            "gcloud compute instances create --zone z1 --image-project p n1 --image i --subnet=default"
        );
    }

    #[test]
    fn test_empty_record_still_builds() {
        let commands = GcpProvider::new().build_commands(&parse_document("[web]\n"));
        assert_eq!(commands[0].command, "gcloud compute instances create --subnet=default");
    }

    #[test]
    fn test_uppercase_and_hyphen_name_rejected() {
        let doc = parse_document(&VALID.replace("name = web1", "name = My-VM1"));
        let err = GcpProvider::new().validate(&doc).unwrap_err();
        assert_eq!(err.reason(), ValidationReason::InvalidNameFormat);
    }

    #[test]
    fn test_missing_field_reported_before_name_format() {
        let doc = parse_document("[web]\nname = Bad_Name\nimage = i\nzone = z\n");
        let err = GcpProvider::new().validate(&doc).unwrap_err();
        assert_eq!(
            err,
            ValidationError::MissingField {
                index: 1,
                label: "web".to_string(),
                field: "imageproject",
            }
        );
    }

    #[test]
    fn test_instances_checked_in_order() {
        let content = format!("{VALID}[db]\nname = DB\nimage = i\nimageproject = p\nzone = z\n[x]\n");
        let err = GcpProvider::new().validate(&parse_document(&content)).unwrap_err();
        assert_eq!(err.reason(), ValidationReason::InvalidNameFormat);
    }

    #[test]
    fn test_empty_document_is_valid() {
        assert!(GcpProvider::new().validate(&parse_document("")).is_ok());
    }
}
