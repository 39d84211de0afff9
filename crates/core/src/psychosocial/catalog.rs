//! Canonical COPSOQ II question catalog (50 questions, 7 dimensions).
//!
//! This table is the single source for the question-to-dimension mapping
//! used by scoring. Weights and reverse flags are descriptive metadata:
//! scoring averages raw answers and does not apply them.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::Serialize;

use super::psychosocial_model::{CopsoqDimension, DimensionDefinition};

use CopsoqDimension::*;
use LikertScale::*;

/// Answer scale of a question; every scale has five points, scored 0-4.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LikertScale {
    Frequency,
    Satisfaction,
    Likelihood,
    Extent,
}

impl LikertScale {
    /// Labels for scores 0 through 4.
    pub fn labels(&self) -> [&'static str; 5] {
        match self {
            Frequency => ["Nunca", "Raramente", "Às vezes", "Frequentemente", "Sempre"],
            Satisfaction => [
                "Muito insatisfeito",
                "Insatisfeito",
                "Neutro",
                "Satisfeito",
                "Muito satisfeito",
            ],
            Likelihood => ["Nunca", "Raramente", "Talvez", "Provavelmente", "Certamente"],
            Extent => [
                "Em pequena extensão",
                "Em alguma extensão",
                "Moderadamente",
                "Em grande extensão",
                "Em muito grande extensão",
            ],
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CopsoqQuestion {
    pub id: &'static str,
    pub dimension: CopsoqDimension,
    pub subdimension: &'static str,
    pub text: &'static str,
    pub scale: LikertScale,
    pub weight: Decimal,
    /// Higher answers mean lower risk for this question.
    pub reverse: bool,
}

const fn question(
    id: &'static str,
    dimension: CopsoqDimension,
    subdimension: &'static str,
    text: &'static str,
    scale: LikertScale,
    reverse: bool,
) -> CopsoqQuestion {
    CopsoqQuestion {
        id,
        dimension,
        subdimension,
        text,
        scale,
        weight: dec!(1.0),
        reverse,
    }
}

pub static COPSOQ_QUESTIONS: [CopsoqQuestion; 50] = [
    question("q1", Demands, "Exigências Quantitativas", "Com que frequência você precisa trabalhar muito rápido?", Frequency, false),
    question("q2", Demands, "Exigências Quantitativas", "Com que frequência a quantidade de trabalho é desigualmente distribuída causando acúmulo?", Frequency, false),
    question("q3", Demands, "Ritmo de Trabalho", "Você precisa manter-se em um ritmo de trabalho elevado durante toda a jornada?", Frequency, false),
    question("q4", Demands, "Exigências Emocionais", "Seu trabalho exige que você lide com situações emocionalmente difíceis?", Frequency, false),
    question("q5", Demands, "Exigências Emocionais", "Você se envolve emocionalmente com seu trabalho?", Frequency, false),
    question("q6", Demands, "Exigências Cognitivas", "Seu trabalho exige que você tome decisões difíceis?", Frequency, false),
    question("q7", Demands, "Exigências Cognitivas", "Seu trabalho requer um alto nível de concentração?", Frequency, false),
    question("q8", Demands, "Exigências de Esconder Emoções", "Você precisa esconder seus sentimentos no trabalho?", Frequency, false),
    question("q9", Demands, "Conflitos de Trabalho-Família", "Seu trabalho interfere em suas responsabilidades familiares?", Frequency, false),
    question("q10", Organization, "Influência no Trabalho", "Você pode influenciar as decisões importantes para o seu trabalho?", Frequency, true),
    question("q11", Organization, "Influência no Trabalho", "Você tem influência sobre a quantidade de trabalho que lhe é atribuída?", Frequency, true),
    question("q12", Organization, "Possibilidades de Desenvolvimento", "Você tem a possibilidade de aprender coisas novas através do seu trabalho?", Frequency, true),
    question("q13", Organization, "Possibilidades de Desenvolvimento", "Seu trabalho permite que você use suas habilidades?", Frequency, true),
    question("q14", Organization, "Significado do Trabalho", "Seu trabalho tem significado para você?", Frequency, true),
    question("q15", Organization, "Significado do Trabalho", "Você sente que o trabalho que realiza é importante?", Frequency, true),
    question("q16", Organization, "Compromisso com o Local de Trabalho", "Você gosta de falar com outros sobre o seu local de trabalho?", Frequency, true),
    question("q17", Organization, "Clareza do Papel", "Você sabe exatamente quais são suas responsabilidades?", Frequency, true),
    question("q18", SocialRelations, "Previsibilidade", "No seu trabalho, você é informado com antecedência sobre mudanças importantes?", Frequency, true),
    question("q19", SocialRelations, "Apoio Social de Colegas", "Com que frequência você recebe ajuda e apoio dos seus colegas?", Frequency, true),
    question("q20", SocialRelations, "Apoio Social de Colegas", "Seus colegas estão dispostos a ouvir seus problemas de trabalho?", Frequency, true),
    question("q21", SocialRelations, "Apoio Social de Superiores", "Com que frequência seu superior imediato fala com você sobre como você realiza seu trabalho?", Frequency, true),
    question("q22", SocialRelations, "Apoio Social de Superiores", "Seu superior imediato está disposto a ouvir seus problemas de trabalho?", Frequency, true),
    question("q23", SocialRelations, "Qualidade da Liderança", "Seu superior imediato planeja bem o trabalho?", Frequency, true),
    question("q24", SocialRelations, "Qualidade da Liderança", "Seu superior imediato resolve bem os conflitos?", Frequency, true),
    question("q25", SocialRelations, "Senso de Comunidade", "Existe um bom ambiente de trabalho entre você e seus colegas?", Frequency, true),
    question("q26", SocialRelations, "Senso de Comunidade", "Há uma boa cooperação entre os colegas de trabalho?", Frequency, true),
    question("q27", SocialRelations, "Feedback", "Você recebe feedback adequado sobre seu trabalho?", Frequency, true),
    question("q28", SocialRelations, "Reconhecimento", "Você recebe o reconhecimento que merece do seu superior?", Frequency, true),
    question("q29", SocialRelations, "Reconhecimento", "O seu trabalho é respeitado pelos seus colegas?", Frequency, true),
    question("q30", WorkIndividual, "Insegurança no Trabalho", "Você está preocupado em perder seu emprego?", Frequency, false),
    question("q31", WorkIndividual, "Insegurança no Trabalho", "Você está preocupado com mudanças indesejadas em suas condições de trabalho?", Frequency, false),
    question("q32", WorkIndividual, "Satisfação no Trabalho", "Considerando tudo, você está satisfeito com seu trabalho?", Satisfaction, true),
    question("q33", WorkIndividual, "Satisfação no Trabalho", "Você recomendaria um bom amigo a trabalhar no seu local de trabalho?", Likelihood, true),
    question("q34", WorkIndividual, "Conflito Trabalho-Vida", "Você sente que seu trabalho tira energia que você gostaria de dar à sua família?", Frequency, false),
    question("q35", WorkIndividual, "Conflito Trabalho-Vida", "Você sente que seu trabalho interfere com sua vida pessoal?", Frequency, false),
    question("q36", Values, "Confiança Horizontal", "Os funcionários confiam uns nos outros de uma forma geral?", Extent, true),
    question("q37", Values, "Confiança Vertical", "Os funcionários confiam nas informações que vêm da administração?", Extent, true),
    question("q38", Values, "Justiça e Respeito", "Os conflitos são resolvidos de uma maneira justa?", Extent, true),
    question("q39", Values, "Justiça e Respeito", "O trabalho é distribuído de forma justa?", Extent, true),
    question("q40", Values, "Transparência", "A administração é aberta e transparente?", Extent, true),
    question("q41", Health, "Problemas em Dormir", "Nas últimas 4 semanas, você teve problemas para dormir?", Frequency, false),
    question("q42", Health, "Burnout", "Nas últimas 4 semanas, você se sentiu fisicamente exausto?", Frequency, false),
    question("q43", Health, "Burnout", "Nas últimas 4 semanas, você se sentiu emocionalmente exausto?", Frequency, false),
    question("q44", Health, "Estresse", "Nas últimas 4 semanas, você se sentiu estressado?", Frequency, false),
    question("q45", Health, "Sintomas Somáticos", "Nas últimas 4 semanas, você teve dores de cabeça?", Frequency, false),
    question("q46", Health, "Sintomas Somáticos", "Nas últimas 4 semanas, você teve tensão muscular ou dores?", Frequency, false),
    question("q47", OffensiveBehaviors, "Assédio Moral", "Nas últimas 12 meses, você foi exposto a comentários ofensivos ou humilhantes no trabalho?", Frequency, false),
    question("q48", OffensiveBehaviors, "Assédio Sexual", "Nas últimas 12 meses, você foi exposto a atenção sexual indesejada no trabalho?", Frequency, false),
    question("q49", OffensiveBehaviors, "Ameaças de Violência", "Nas últimas 12 meses, você foi ameaçado com violência física no trabalho?", Frequency, false),
    question("q50", OffensiveBehaviors, "Violência Física", "Nas últimas 12 meses, você foi exposto a violência física no trabalho?", Frequency, false),
];

/// Display metadata of a dimension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DimensionMetadata {
    pub name: &'static str,
    pub description: &'static str,
    pub subdimensions: &'static [&'static str],
}

pub fn dimension_metadata(dimension: CopsoqDimension) -> DimensionMetadata {
    match dimension {
        Demands => DimensionMetadata {
            name: "Exigências no Trabalho",
            description: "Avalia demandas quantitativas, ritmo, exigências emocionais e cognitivas",
            subdimensions: &[
                "Exigências Quantitativas",
                "Ritmo de Trabalho",
                "Exigências Emocionais",
                "Exigências Cognitivas",
            ],
        },
        Organization => DimensionMetadata {
            name: "Organização do Trabalho",
            description: "Avalia influência, possibilidades de desenvolvimento e significado do trabalho",
            subdimensions: &[
                "Influência no Trabalho",
                "Possibilidades de Desenvolvimento",
                "Significado do Trabalho",
            ],
        },
        SocialRelations => DimensionMetadata {
            name: "Relações Sociais e Liderança",
            description: "Avalia apoio social, qualidade da liderança e senso de comunidade",
            subdimensions: &[
                "Apoio Social",
                "Qualidade da Liderança",
                "Senso de Comunidade",
                "Reconhecimento",
            ],
        },
        WorkIndividual => DimensionMetadata {
            name: "Interface Trabalho-Indivíduo",
            description: "Avalia insegurança no trabalho, satisfação e conflito trabalho-vida",
            subdimensions: &[
                "Insegurança no Trabalho",
                "Satisfação no Trabalho",
                "Conflito Trabalho-Vida",
            ],
        },
        Values => DimensionMetadata {
            name: "Valores no Local de Trabalho",
            description: "Avalia confiança, justiça e transparência organizacional",
            subdimensions: &["Confiança Horizontal", "Confiança Vertical", "Justiça e Respeito"],
        },
        Health => DimensionMetadata {
            name: "Saúde e Bem-estar",
            description: "Avalia problemas de sono, burnout, estresse e sintomas somáticos",
            subdimensions: &[
                "Problemas em Dormir",
                "Burnout",
                "Estresse",
                "Sintomas Somáticos",
            ],
        },
        OffensiveBehaviors => DimensionMetadata {
            name: "Comportamentos Ofensivos",
            description: "Avalia exposição a assédio, violência e discriminação",
            subdimensions: &["Assédio Moral", "Assédio Sexual", "Violência"],
        },
    }
}

/// Catalog questions belonging to a dimension, in catalog order.
pub fn questions_for(dimension: CopsoqDimension) -> impl Iterator<Item = &'static CopsoqQuestion> {
    COPSOQ_QUESTIONS
        .iter()
        .filter(move |q| q.dimension == dimension)
}

pub fn find_question(id: &str) -> Option<&'static CopsoqQuestion> {
    COPSOQ_QUESTIONS.iter().find(|q| q.id == id)
}

/// The seven dimension definitions derived from the catalog.
pub fn default_dimensions() -> Vec<DimensionDefinition> {
    CopsoqDimension::ALL
        .iter()
        .map(|&dimension| {
            DimensionDefinition::new(dimension, questions_for(dimension).map(|q| q.id))
        })
        .collect()
}
