//! Question Flow - asks the fixed question sequence.
//!
//! The flow is linear with one early exit: answering `none` to the CSS
//! question ends it. Dependencies are appended as each answer resolves, so
//! their order is fully determined by the answers.

use std::str::FromStr;

use tracing::{debug, info, instrument};

use crate::{
    application::ports::Prompter,
    domain::{
        AnswerRecord, CssConfig, CssType, DependencyList, DependencyListBuilder, DomainError,
        LangType, ListQuestion, questions,
    },
    error::ScaffResult,
};

/// Everything the question flow produces.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlowOutcome {
    pub answers: AnswerRecord,
    pub dependencies: DependencyList,
}

/// Runs the question sequence against a [`Prompter`].
pub struct QuestionFlow<'a> {
    prompter: &'a dyn Prompter,
    force: bool,
}

impl<'a> QuestionFlow<'a> {
    pub fn new(prompter: &'a dyn Prompter, force: bool) -> Self {
        Self { prompter, force }
    }

    /// Ask every applicable question and freeze the answers.
    #[instrument(skip_all, fields(force = self.force))]
    pub fn run(&self) -> ScaffResult<FlowOutcome> {
        let mut deps = DependencyListBuilder::new();

        // JS language
        let lang_type: LangType = self.choose(&questions::lang_type())?;
        match lang_type {
            LangType::Es6 => {
                deps.extend(&["babel-loader", "@babel/core", "@babel/preset-env"]);
            }
            LangType::TypeScript => {
                deps.extend(&["typescript", "ts-loader"]);
            }
            LangType::None => {}
        }

        let dev_server = self.prompter.confirm(&questions::dev_server(), self.force)?;
        deps.extend_if(dev_server, &["webpack-dev-server"]);

        let html_webpack_plugin = self
            .prompter
            .confirm(&questions::html_webpack_plugin(), self.force)?;
        deps.extend_if(html_webpack_plugin, &["html-webpack-plugin"]);

        let builder = AnswerRecord::builder().base(lang_type, dev_server, html_webpack_plugin)?;
        debug!(%lang_type, dev_server, html_webpack_plugin, "base answers committed");

        // CSS
        let css_type: CssType = self.choose(&questions::css_type())?;
        if css_type == CssType::None {
            let answers = builder.css(CssConfig::None).build()?;
            info!(%answers, "question flow complete");
            return Ok(FlowOutcome {
                answers,
                dependencies: deps.finish(),
            });
        }

        let is_css = if css_type == CssType::CssOnly {
            true
        } else {
            self.prompter
                .confirm(&questions::is_css(css_type), self.force)?
        };
        let is_post_css = self
            .prompter
            .confirm(&questions::is_post_css(css_type), self.force)?;
        let is_extract_plugin = self
            .prompter
            .confirm(&questions::is_extract_plugin(), self.force)?;

        match css_type {
            CssType::Sass => {
                deps.extend(&["sass-loader", "sass"]);
            }
            CssType::Less => {
                deps.extend(&["less-loader", "less"]);
            }
            CssType::Stylus => {
                deps.extend(&["stylus-loader", "stylus"]);
            }
            CssType::CssOnly | CssType::None => {}
        }
        deps.extend_if(is_css, &["style-loader", "css-loader"])
            .extend_if(is_post_css, &["postcss-loader", "postcss", "autoprefixer"])
            .extend_if(is_extract_plugin, &["mini-css-extract-plugin"]);

        let css = CssConfig::configured(css_type, is_css, is_post_css, is_extract_plugin)?;
        let answers = builder.css(css).build()?;
        info!(%answers, "question flow complete");

        Ok(FlowOutcome {
            answers,
            dependencies: deps.finish(),
        })
    }

    /// Ask a list question and parse the answer into its value type.
    ///
    /// Only the offered labels are accepted.
    fn choose<T>(&self, question: &ListQuestion) -> ScaffResult<T>
    where
        T: FromStr<Err = DomainError>,
    {
        let answer = self.prompter.list(question, self.force)?;
        if !question.offers(&answer) {
            return Err(DomainError::InvalidChoice {
                key: question.key,
                value: answer,
            }
            .into());
        }
        Ok(answer.parse()?)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::sync::Mutex;

    use mockall::predicate::always;

    use super::*;
    use crate::application::ports::MockPrompter;
    use crate::domain::{ConfirmQuestion, CssType};
    use crate::error::ScaffError;

    /// Answers from a table, falling back to the question default.
    /// Records the keys it was asked.
    struct TablePrompter {
        answers: HashMap<&'static str, String>,
        asked: Mutex<Vec<&'static str>>,
    }

    impl TablePrompter {
        fn new(answers: &[(&'static str, &str)]) -> Self {
            Self {
                answers: answers.iter().map(|(k, v)| (*k, v.to_string())).collect(),
                asked: Mutex::new(Vec::new()),
            }
        }

        fn asked(&self) -> Vec<&'static str> {
            self.asked.lock().unwrap().clone()
        }
    }

    impl Prompter for TablePrompter {
        fn list(&self, question: &ListQuestion, force: bool) -> ScaffResult<String> {
            self.asked.lock().unwrap().push(question.key);
            if force {
                return Ok(question.default.to_string());
            }
            Ok(self
                .answers
                .get(question.key)
                .cloned()
                .unwrap_or_else(|| question.default.to_string()))
        }

        fn confirm(&self, question: &ConfirmQuestion, force: bool) -> ScaffResult<bool> {
            self.asked.lock().unwrap().push(question.key);
            if force {
                return Ok(question.default);
            }
            Ok(self
                .answers
                .get(question.key)
                .map(|v| v == "true")
                .unwrap_or(question.default))
        }
    }

    fn run(prompter: &TablePrompter) -> FlowOutcome {
        QuestionFlow::new(prompter, false).run().unwrap()
    }

    #[test]
    fn typescript_sass_scenario() {
        let prompter = TablePrompter::new(&[
            ("langType", "Typescript"),
            ("devServer", "true"),
            ("htmlWebpackPlugin", "true"),
            ("cssType", "SASS"),
            ("isCSS", "true"),
            ("isPostCSS", "false"),
            ("isExtractPlugin", "true"),
        ]);
        let outcome = run(&prompter);

        assert_eq!(
            outcome.dependencies.as_slice(),
            &[
                "typescript",
                "ts-loader",
                "webpack-dev-server",
                "html-webpack-plugin",
                "sass-loader",
                "sass",
                "style-loader",
                "css-loader",
                "mini-css-extract-plugin",
            ]
        );
        assert_eq!(outcome.answers.css_type(), CssType::Sass);
        assert!(!outcome.answers.is_post_css());
    }

    #[test]
    fn all_negative_scenario_has_no_dependencies() {
        let prompter = TablePrompter::new(&[
            ("langType", "none"),
            ("devServer", "false"),
            ("htmlWebpackPlugin", "false"),
            ("cssType", "none"),
        ]);
        let outcome = run(&prompter);

        assert!(outcome.dependencies.is_empty());
        assert_eq!(outcome.answers.lang_type(), LangType::None);
    }

    #[test]
    fn css_none_skips_remaining_questions() {
        let prompter = TablePrompter::new(&[("cssType", "none")]);
        let outcome = run(&prompter);

        assert_eq!(
            prompter.asked(),
            vec!["langType", "devServer", "htmlWebpackPlugin", "cssType"]
        );
        assert_eq!(outcome.answers.css(), CssConfig::None);
        assert!(!outcome.answers.is_css());
        assert!(!outcome.answers.is_post_css());
        assert!(!outcome.answers.is_extract_plugin());
        for css_dep in [
            "style-loader",
            "css-loader",
            "postcss-loader",
            "mini-css-extract-plugin",
        ] {
            assert!(!outcome.dependencies.contains(css_dep));
        }
    }

    #[test]
    fn css_only_never_asks_is_css_and_defaults_post_css_on() {
        let prompter = TablePrompter::new(&[("cssType", "CSS only")]);
        let outcome = run(&prompter);

        assert!(!prompter.asked().contains(&"isCSS"));
        assert!(outcome.answers.is_css());
        assert!(outcome.answers.is_post_css());
        assert_eq!(
            &outcome.dependencies.as_slice()[2..],
            &[
                "style-loader",
                "css-loader",
                "postcss-loader",
                "postcss",
                "autoprefixer",
                "mini-css-extract-plugin",
            ]
        );
    }

    #[test]
    fn es6_with_less_and_postcss() {
        let prompter = TablePrompter::new(&[
            ("langType", "ES6"),
            ("devServer", "false"),
            ("htmlWebpackPlugin", "true"),
            ("cssType", "LESS"),
            ("isCSS", "false"),
            ("isPostCSS", "true"),
            ("isExtractPlugin", "false"),
        ]);
        let outcome = run(&prompter);

        assert_eq!(
            outcome.dependencies.as_slice(),
            &[
                "babel-loader",
                "@babel/core",
                "@babel/preset-env",
                "html-webpack-plugin",
                "less-loader",
                "less",
                "postcss-loader",
                "postcss",
                "autoprefixer",
            ]
        );
    }

    #[test]
    fn force_resolves_every_prompt_to_its_default() {
        let prompter = TablePrompter::new(&[("langType", "Typescript"), ("cssType", "SASS")]);
        let outcome = QuestionFlow::new(&prompter, true).run().unwrap();

        assert_eq!(outcome.answers.lang_type(), LangType::None);
        assert!(outcome.answers.dev_server());
        assert!(outcome.answers.html_webpack_plugin());
        assert_eq!(outcome.answers.css(), CssConfig::None);
        assert_eq!(
            outcome.dependencies.as_slice(),
            &["webpack-dev-server", "html-webpack-plugin"]
        );
    }

    #[test]
    fn forwards_force_flag_to_every_call() {
        let mut prompter = MockPrompter::new();
        prompter
            .expect_list()
            .withf(|_, force| *force)
            .times(2)
            .returning(|q, _| Ok(q.default.to_string()));
        prompter
            .expect_confirm()
            .withf(|_, force| *force)
            .times(2)
            .returning(|q, _| Ok(q.default));

        let outcome = QuestionFlow::new(&prompter, true).run().unwrap();
        assert_eq!(outcome.answers.css(), CssConfig::None);
    }

    #[test]
    fn css_only_issues_two_confirms_after_css_type() {
        let mut prompter = MockPrompter::new();
        prompter
            .expect_list()
            .with(always(), always())
            .times(2)
            .returning(|q, _| {
                Ok(match q.key {
                    "cssType" => "CSS only".to_string(),
                    _ => q.default.to_string(),
                })
            });
        // devServer, htmlWebpackPlugin, isPostCSS, isExtractPlugin
        prompter
            .expect_confirm()
            .withf(|q, _| q.key != "isCSS")
            .times(4)
            .returning(|q, _| Ok(q.default));

        let outcome = QuestionFlow::new(&prompter, false).run().unwrap();
        assert_eq!(outcome.answers.css_type(), CssType::CssOnly);
    }

    #[test]
    fn unknown_choice_is_rejected() {
        let prompter = TablePrompter::new(&[("langType", "CoffeeScript")]);
        let err = QuestionFlow::new(&prompter, false).run().unwrap_err();

        assert!(matches!(
            err,
            ScaffError::Domain(DomainError::InvalidChoice { key: "langType", .. })
        ));
    }

    #[test]
    fn prompt_failure_propagates() {
        let mut prompter = MockPrompter::new();
        prompter.expect_list().returning(|q, _| {
            Err(crate::application::ApplicationError::PromptCancelled {
                key: q.key.to_string(),
            }
            .into())
        });
        prompter.expect_confirm().never();

        let err = QuestionFlow::new(&prompter, false).run().unwrap_err();
        assert!(err.is_cancelled());
    }
}
