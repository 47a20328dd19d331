//! Localized notice catalog for the seven supported locales.
//!
//! Error notices always prefer the server's own message, which arrives
//! already localized; the catalog only supplies the success phrasing and
//! the generic fallback when the server sent nothing usable.

use vektora_api::{Error, Locale, Resource};

/// What a mutation did, for notice phrasing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MutationVerb {
    Created,
    Updated,
    Deleted,
    Submitted,
    Approved,
    Rejected,
}

/// The localized success notice for a completed mutation.
pub fn success_notice(locale: Locale, resource: Resource, verb: MutationVerb) -> String {
    let label = resource_label(locale, resource);
    let phrase = verb_phrase(locale, verb);
    match locale {
        // Arabic phrases lead with the verb.
        Locale::Arabic => format!("{} {}", phrase, label),
        _ => format!("{} {}", label, phrase),
    }
}

/// The localized error notice for a failed mutation: the server message
/// verbatim when present, otherwise the generic fallback.
pub fn error_notice(locale: Locale, error: &Error) -> String {
    match error.server_message() {
        Some(message) if !message.trim().is_empty() => message.to_string(),
        _ => fallback_error(locale).to_string(),
    }
}

/// The generic "unexpected error" string.
pub fn fallback_error(locale: Locale) -> &'static str {
    match locale {
        Locale::Turkish => "Beklenmeyen bir hata oluştu",
        Locale::English => "An unexpected error occurred",
        Locale::German => "Ein unerwarteter Fehler ist aufgetreten",
        Locale::French => "Une erreur inattendue s'est produite",
        Locale::Italian => "Si è verificato un errore imprevisto",
        Locale::Spanish => "Se ha producido un error inesperado",
        Locale::Arabic => "حدث خطأ غير متوقع",
    }
}

/// The display label of a resource.
pub fn resource_label(locale: Locale, resource: Resource) -> &'static str {
    match locale {
        Locale::Turkish => match resource {
            Resource::User => "Kullanıcı",
            Resource::ApprovalRole => "Onay rolü",
            Resource::ApprovalRoleGroup => "Onay rol grubu",
            Resource::PowerBiReportRoleMapping => "Rapor yetki eşlemesi",
            Resource::Quotation => "Teklif",
            Resource::PriceRule => "Fiyat kuralı",
        },
        Locale::English => match resource {
            Resource::User => "User",
            Resource::ApprovalRole => "Approval role",
            Resource::ApprovalRoleGroup => "Approval role group",
            Resource::PowerBiReportRoleMapping => "Report role mapping",
            Resource::Quotation => "Quotation",
            Resource::PriceRule => "Price rule",
        },
        Locale::German => match resource {
            Resource::User => "Benutzer",
            Resource::ApprovalRole => "Genehmigungsrolle",
            Resource::ApprovalRoleGroup => "Genehmigungsrollengruppe",
            Resource::PowerBiReportRoleMapping => "Berichtsrollenzuordnung",
            Resource::Quotation => "Angebot",
            Resource::PriceRule => "Preisregel",
        },
        Locale::French => match resource {
            Resource::User => "Utilisateur",
            Resource::ApprovalRole => "Rôle d'approbation",
            Resource::ApprovalRoleGroup => "Groupe de rôles d'approbation",
            Resource::PowerBiReportRoleMapping => "Mappage de rôle de rapport",
            Resource::Quotation => "Devis",
            Resource::PriceRule => "Règle de prix",
        },
        Locale::Italian => match resource {
            Resource::User => "Utente",
            Resource::ApprovalRole => "Ruolo di approvazione",
            Resource::ApprovalRoleGroup => "Gruppo di ruoli di approvazione",
            Resource::PowerBiReportRoleMapping => "Mappatura ruolo report",
            Resource::Quotation => "Offerta",
            Resource::PriceRule => "Regola di prezzo",
        },
        Locale::Spanish => match resource {
            Resource::User => "Usuario",
            Resource::ApprovalRole => "Rol de aprobación",
            Resource::ApprovalRoleGroup => "Grupo de roles de aprobación",
            Resource::PowerBiReportRoleMapping => "Asignación de rol de informe",
            Resource::Quotation => "Cotización",
            Resource::PriceRule => "Regla de precio",
        },
        Locale::Arabic => match resource {
            Resource::User => "المستخدم",
            Resource::ApprovalRole => "دور الموافقة",
            Resource::ApprovalRoleGroup => "مجموعة أدوار الموافقة",
            Resource::PowerBiReportRoleMapping => "ربط دور التقرير",
            Resource::Quotation => "عرض السعر",
            Resource::PriceRule => "قاعدة السعر",
        },
    }
}

fn verb_phrase(locale: Locale, verb: MutationVerb) -> &'static str {
    match locale {
        Locale::Turkish => match verb {
            MutationVerb::Created => "oluşturuldu",
            MutationVerb::Updated => "güncellendi",
            MutationVerb::Deleted => "silindi",
            MutationVerb::Submitted => "onaya gönderildi",
            MutationVerb::Approved => "onaylandı",
            MutationVerb::Rejected => "reddedildi",
        },
        Locale::English => match verb {
            MutationVerb::Created => "created",
            MutationVerb::Updated => "updated",
            MutationVerb::Deleted => "deleted",
            MutationVerb::Submitted => "submitted for approval",
            MutationVerb::Approved => "approved",
            MutationVerb::Rejected => "rejected",
        },
        Locale::German => match verb {
            MutationVerb::Created => "erstellt",
            MutationVerb::Updated => "aktualisiert",
            MutationVerb::Deleted => "gelöscht",
            MutationVerb::Submitted => "zur Genehmigung eingereicht",
            MutationVerb::Approved => "genehmigt",
            MutationVerb::Rejected => "abgelehnt",
        },
        Locale::French => match verb {
            MutationVerb::Created => "créé",
            MutationVerb::Updated => "mis à jour",
            MutationVerb::Deleted => "supprimé",
            MutationVerb::Submitted => "soumis pour approbation",
            MutationVerb::Approved => "approuvé",
            MutationVerb::Rejected => "rejeté",
        },
        Locale::Italian => match verb {
            MutationVerb::Created => "creato",
            MutationVerb::Updated => "aggiornato",
            MutationVerb::Deleted => "eliminato",
            MutationVerb::Submitted => "inviato per approvazione",
            MutationVerb::Approved => "approvato",
            MutationVerb::Rejected => "rifiutato",
        },
        Locale::Spanish => match verb {
            MutationVerb::Created => "creado",
            MutationVerb::Updated => "actualizado",
            MutationVerb::Deleted => "eliminado",
            MutationVerb::Submitted => "enviado a aprobación",
            MutationVerb::Approved => "aprobado",
            MutationVerb::Rejected => "rechazado",
        },
        Locale::Arabic => match verb {
            MutationVerb::Created => "تم إنشاء",
            MutationVerb::Updated => "تم تحديث",
            MutationVerb::Deleted => "تم حذف",
            MutationVerb::Submitted => "تم إرسال",
            MutationVerb::Approved => "تمت الموافقة على",
            MutationVerb::Rejected => "تم رفض",
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL_LOCALES: [Locale; 7] = [
        Locale::Turkish,
        Locale::English,
        Locale::German,
        Locale::French,
        Locale::Italian,
        Locale::Spanish,
        Locale::Arabic,
    ];

    #[test]
    fn turkish_create_notice() {
        assert_eq!(
            success_notice(Locale::Turkish, Resource::User, MutationVerb::Created),
            "Kullanıcı oluşturuldu"
        );
    }

    #[test]
    fn arabic_leads_with_the_verb() {
        assert_eq!(
            success_notice(Locale::Arabic, Resource::User, MutationVerb::Created),
            "تم إنشاء المستخدم"
        );
    }

    #[test]
    fn catalog_is_complete_for_every_locale() {
        for locale in ALL_LOCALES {
            assert!(!fallback_error(locale).is_empty());
            for resource in Resource::ALL {
                for verb in [
                    MutationVerb::Created,
                    MutationVerb::Updated,
                    MutationVerb::Deleted,
                    MutationVerb::Submitted,
                    MutationVerb::Approved,
                    MutationVerb::Rejected,
                ] {
                    assert!(!success_notice(locale, resource, verb).is_empty());
                }
            }
        }
    }

    #[test]
    fn error_notice_prefers_server_message() {
        let err = Error::UnexpectedResponse {
            message: "Kullanıcı oluşturulamadı".to_string(),
        };
        assert_eq!(
            error_notice(Locale::Turkish, &err),
            "Kullanıcı oluşturulamadı"
        );
    }

    #[test]
    fn error_notice_falls_back_when_no_server_message() {
        let err = Error::Transport("connection refused".to_string());
        assert_eq!(
            error_notice(Locale::Turkish, &err),
            "Beklenmeyen bir hata oluştu"
        );
    }
}
