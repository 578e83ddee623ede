use serde::Serialize;

use crate::filters::Searchable;

/// FaqEntry
///
/// A question of the public FAQ. The list is editorial content shipped with
/// the site, not stored.
#[derive(Debug, Clone, Copy, Serialize, PartialEq)]
pub struct FaqEntry {
    pub topic: &'static str,
    pub question: &'static str,
    pub answer: &'static str,
}

impl Searchable for FaqEntry {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.topic, self.question, self.answer]
    }
}

pub const FAQ: &[FaqEntry] = &[
    FaqEntry {
        topic: "Titres publics",
        question: "Qu'est-ce qu'un bon du Trésor assimilable (BTA) ?",
        answer: "Un titre de créance à moyen ou long terme émis par l'État par voie d'adjudication, \
                 portant intérêt à taux fixe et remboursable in fine.",
    },
    FaqEntry {
        topic: "Titres publics",
        question: "Qu'est-ce qu'un bon du Trésor à court terme (BTC) ?",
        answer: "Un titre émis pour une durée inférieure à un an, à intérêts précomptés, \
                 destiné au financement des besoins de trésorerie de l'État.",
    },
    FaqEntry {
        topic: "Adjudications",
        question: "Comment participer aux adjudications ?",
        answer: "Les soumissions sont déposées par l'intermédiaire des spécialistes en valeurs \
                 du Trésor, selon le calendrier publié sur ce site.",
    },
    FaqEntry {
        topic: "Adjudications",
        question: "Où consulter les résultats des adjudications ?",
        answer: "Les résultats sont publiés dans la rubrique Titres publics dès la clôture de \
                 chaque séance.",
    },
    FaqEntry {
        topic: "Investisseurs",
        question: "Un particulier peut-il investir dans les titres de l'État ?",
        answer: "Oui. Remplissez le formulaire d'inscription investisseur; un conseiller vous \
                 recontactera pour ouvrir un compte titres.",
    },
    FaqEntry {
        topic: "Publications",
        question: "Où trouver le bulletin mensuel de la dette publique ?",
        answer: "Dans la rubrique Publications, catégorie bulletins, au format PDF.",
    },
    FaqEntry {
        topic: "Contact",
        question: "Comment contacter la Direction générale du Trésor ?",
        answer: "Par le formulaire de contact du site ou aux heures d'ouverture des services.",
    },
];
