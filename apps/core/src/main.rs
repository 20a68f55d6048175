// Prompt Refiner terminal front-end
// Input -> questions -> result, driven by the wizard state machine

use anyhow::Result;
use prompt_refiner::{
    Answer, ApiConfig, AppError, FallbackQuestionSource, LocalQuestionSource, Question,
    RemoteQuestionSource, WizardSession, WizardState,
};
use tokio::io::{AsyncBufReadExt, BufReader, Lines, Stdin};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

type Input = Lines<BufReader<Stdin>>;
type Session = WizardSession<FallbackQuestionSource<RemoteQuestionSource, LocalQuestionSource>>;

const BACK_COMMAND: &str = ":back";
const RESTART_COMMAND: &str = ":restart";
const QUIT_COMMAND: &str = ":quit";

/// What the user asked for while answering questions
enum AnswerInput {
    Answers(Vec<Answer>),
    Back,
    Restart,
    Quit,
}

async fn read_line(input: &mut Input) -> Result<Option<String>> {
    Ok(input.next_line().await?)
}

/// Reads a multi-line prompt terminated by an empty line. `None` on EOF or `:quit`.
async fn read_prompt(input: &mut Input) -> Result<Option<String>> {
    println!("\n개선하고 싶은 프롬프트를 입력하세요 (빈 줄로 입력 종료, {} 로 종료):", QUIT_COMMAND);

    let mut lines = Vec::new();
    while let Some(line) = read_line(input).await? {
        if line.trim() == QUIT_COMMAND {
            return Ok(None);
        }
        if line.trim().is_empty() {
            if lines.is_empty() {
                continue;
            }
            break;
        }
        lines.push(line);
    }

    if lines.is_empty() {
        return Ok(None);
    }
    Ok(Some(lines.join("\n")))
}

fn print_question(index: usize, total: usize, question: &Question) {
    println!("\n[{}/{}] ({}) {}", index + 1, total, question.category, question.question);
    for (i, example) in question.examples.iter().enumerate() {
        println!("    {}. {}", i + 1, example);
    }
}

async fn read_answers(input: &mut Input, questions: &[Question]) -> Result<AnswerInput> {
    println!(
        "\n질문에 답해주세요. 예시 번호를 입력하면 해당 예시가 답변이 됩니다. 건너뛰려면 Enter, 이전 단계는 {}, 처음부터는 {}.",
        BACK_COMMAND, RESTART_COMMAND
    );

    let mut answers = Vec::with_capacity(questions.len());
    for (index, question) in questions.iter().enumerate() {
        print_question(index, questions.len(), question);
        print!("> ");
        std::io::Write::flush(&mut std::io::stdout())?;

        let Some(line) = read_line(input).await? else {
            return Ok(AnswerInput::Quit);
        };
        let line = line.trim();
        match line {
            BACK_COMMAND => return Ok(AnswerInput::Back),
            RESTART_COMMAND => return Ok(AnswerInput::Restart),
            QUIT_COMMAND => return Ok(AnswerInput::Quit),
            _ => {}
        }

        let content = line
            .parse::<usize>()
            .ok()
            .and_then(|n| n.checked_sub(1))
            .and_then(|i| question.examples.get(i))
            .cloned()
            .unwrap_or_else(|| line.to_string());
        answers.push(Answer::new(question.id.clone(), content));
    }

    Ok(AnswerInput::Answers(answers))
}

fn print_result(state: &WizardState) {
    let WizardState::Result { composed } = state else {
        return;
    };

    println!("\n===== 개선된 프롬프트 =====\n");
    println!("{}", composed.composed_prompt);
    println!("\n===== 적용된 개선사항 =====");
    for improvement in &composed.improvements {
        println!("  - {}", improvement);
    }
    let techniques: Vec<&str> = composed.applied_techniques.iter().map(|t| t.label()).collect();
    println!("\n적용된 기법: {}", techniques.join(", "));
}

/// Runs one wizard pass. Returns false when the user wants to quit.
async fn run_wizard(session: &mut Session, input: &mut Input) -> Result<bool> {
    session.start_over();

    let Some(prompt) = read_prompt(input).await? else {
        return Ok(false);
    };

    println!("\n프롬프트를 분석하고 있습니다...");
    session.submit_prompt(&prompt).await?;

    loop {
        match session.state().clone() {
            WizardState::Questions { questions, .. } => match read_answers(input, &questions).await? {
                AnswerInput::Answers(answers) => match session.submit_answers(answers) {
                    Ok(_) => {}
                    Err(AppError::Validation(msg)) => {
                        println!("\n최소 한 개 이상의 질문에 답변해주세요. ({})", msg);
                    }
                    Err(e) => return Err(e.into()),
                },
                AnswerInput::Back => {
                    session.back()?;
                    return Ok(true);
                }
                AnswerInput::Restart => return Ok(true),
                AnswerInput::Quit => return Ok(false),
            },
            WizardState::Result { .. } => {
                print_result(session.state());
                println!("\n다시 시작하려면 Enter, 종료하려면 {}:", QUIT_COMMAND);
                let again = read_line(input).await?;
                return Ok(matches!(again, Some(line) if line.trim() != QUIT_COMMAND));
            }
            WizardState::Error { message } => {
                println!("\n오류가 발생했습니다: {}", message);
                println!("Enter 를 누르면 다시 시작합니다.");
                return Ok(read_line(input).await?.is_some());
            }
            other => {
                error!("Wizard stuck in state {}", other.name());
                return Ok(true);
            }
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let config = ApiConfig::from_env()?;
    info!(?config, "Configuration loaded");

    let source = FallbackQuestionSource::new(
        RemoteQuestionSource::new(config),
        LocalQuestionSource::new(),
    );
    let mut session: Session = WizardSession::new(source);
    let mut input = BufReader::new(tokio::io::stdin()).lines();

    while run_wizard(&mut session, &mut input).await? {}

    info!("Bye");
    Ok(())
}
