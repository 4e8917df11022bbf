use tracing::{debug, warn};

use crate::{
    ast::node::{Node, NodeKind},
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::TokenKind,
};

use super::parser::Parser;

pub fn parse_program(parser: &mut Parser) -> Result<Node, Error> {
    let mut program = Node::new(NodeKind::Program);

    parser.expect(TokenKind::ProgramStart)?;
    while parser.has_tokens_before(TokenKind::ProgramEnd) {
        program.add_child(parse_stmt(parser)?);
    }
    parser.expect(TokenKind::ProgramEnd)?;

    if parser.block_depth() != 0 {
        return Err(Error::new(
            ErrorImpl::MismatchedBlockDelimiters {
                balance: parser.block_depth(),
            },
            parser.get_position(),
        ));
    }

    if parser.has_tokens() {
        warn!(position = %parser.get_position(), "ignoring tokens after PROGRAM_END");
    }

    debug!(statements = program.children.len(), "parsed program");
    Ok(program)
}

pub fn parse_stmt(parser: &mut Parser) -> Result<Node, Error> {
    let Some(kind) = parser.current_token_kind() else {
        return Err(Error::new(
            ErrorImpl::UnexpectedEndOfInput {
                expected: String::from("statement"),
            },
            parser.get_position(),
        ));
    };

    match kind {
        TokenKind::BlockStart => parse_block(parser),
        TokenKind::FunctionDef => parse_function_definition(parser),
        TokenKind::VariableDef => parse_variable_definition(parser),
        TokenKind::IfConditional => parse_if_conditional(parser),
        TokenKind::ForLoop => parse_for_loop(parser),
        TokenKind::Return
        | TokenKind::ProgramStart
        | TokenKind::ProgramEnd
        | TokenKind::BlockEnd
        | TokenKind::ElseConditional
        | TokenKind::Type
        | TokenKind::Identifier
        | TokenKind::LeftParen
        | TokenKind::RightParen
        | TokenKind::StartStatement
        | TokenKind::CommandEnd
        | TokenKind::Assign
        | TokenKind::Other => parse_generic_statement(parser),
    }
}

pub fn parse_block(parser: &mut Parser) -> Result<Node, Error> {
    parser.expect(TokenKind::BlockStart)?;
    parser.scopes_mut().push();

    let mut block = Node::new(NodeKind::Block);
    while parser.has_tokens_before(TokenKind::BlockEnd) {
        block.add_child(parse_stmt(parser)?);
    }

    parser.scopes_mut().pop();
    parser.expect(TokenKind::BlockEnd)?;

    Ok(block)
}

pub fn parse_function_definition(parser: &mut Parser) -> Result<Node, Error> {
    parser.expect(TokenKind::FunctionDef)?;
    let return_type = parser.expect(TokenKind::Type)?.value;
    let name_token = parser.expect(TokenKind::Identifier)?;
    parser.define_function(&name_token.value, name_token.position.clone())?;

    parser.expect(TokenKind::LeftParen)?;
    parser.scopes_mut().push();

    let mut parameters = Node::new(NodeKind::Parameters);
    while parser.has_tokens_before(TokenKind::RightParen) {
        let parameter_type = parser.expect(TokenKind::Type)?.value;
        let parameter = parser.expect(TokenKind::Identifier)?;
        parser.scopes_mut().declare_parameter(
            parameter.value.clone(),
            parameter_type.clone(),
            parameter.position,
        )?;

        parameters.add_child(Node::with_text(
            NodeKind::Parameter,
            format!("{} {}", parameter_type, parameter.value),
        ));
    }

    parser.expect(TokenKind::RightParen)?;
    parser.expect(TokenKind::StartStatement)?;

    let mut function = Node::with_text(
        NodeKind::FunctionDefinition,
        format!("{}: {}", name_token.value, return_type),
    );
    function.add_child(parameters);
    // The body pushes its own frame, nested inside the parameter frame.
    function.add_child(parse_block(parser)?);
    parser.scopes_mut().pop();

    Ok(function)
}

pub fn parse_variable_definition(parser: &mut Parser) -> Result<Node, Error> {
    parser.expect(TokenKind::VariableDef)?;
    let variable_type = parser.expect(TokenKind::Type)?.value;
    let variable = parser.expect(TokenKind::Identifier)?;
    parser.scopes_mut().declare_variable(
        variable.value.clone(),
        variable_type.clone(),
        variable.position,
    )?;

    let mut definition = Node::with_text(
        NodeKind::VariableDefinition,
        format!("{} {}", variable_type, variable.value),
    );

    if parser.current_token_kind() == Some(TokenKind::Assign) {
        parser.expect(TokenKind::Assign)?;
        let value = parse_expression(parser);
        definition.text.push_str(&format!(" = {}", value.text));
    }

    parser.expect(TokenKind::CommandEnd)?;

    Ok(definition)
}

pub fn parse_if_conditional(parser: &mut Parser) -> Result<Node, Error> {
    parser.expect(TokenKind::IfConditional)?;
    parser.expect(TokenKind::LeftParen)?;
    let condition = parse_expression(parser);
    parser.expect(TokenKind::RightParen)?;
    parser.expect(TokenKind::StartStatement)?;

    let mut conditional = Node::with_text(NodeKind::IfConditional, condition.text);
    conditional.add_child(parse_block(parser)?);

    if parser.current_token_kind() == Some(TokenKind::ElseConditional) {
        parser.expect(TokenKind::ElseConditional)?;
        let mut else_branch = Node::new(NodeKind::ElseConditional);
        else_branch.add_child(parse_block(parser)?);
        conditional.add_child(else_branch);
    }

    Ok(conditional)
}

/// Parses `for (<definition> <condition> ; <increment>) <block>`.
///
/// The initializer binds in the enclosing scope, so it stays visible after the loop.
pub fn parse_for_loop(parser: &mut Parser) -> Result<Node, Error> {
    parser.expect(TokenKind::ForLoop)?;
    parser.expect(TokenKind::LeftParen)?;

    if parser.current_token_kind() != Some(TokenKind::VariableDef) {
        return Err(match parser.current_token() {
            Some(token) => Error::new(
                ErrorImpl::ExpectedVariableDefinition {
                    token: token.to_string(),
                },
                token.position.clone(),
            ),
            None => Error::new(
                ErrorImpl::UnexpectedEndOfInput {
                    expected: TokenKind::VariableDef.to_string(),
                },
                parser.get_position(),
            ),
        });
    }
    let initializer = parse_variable_definition(parser)?;

    let condition = parse_checked_clause(parser, NodeKind::Condition, TokenKind::CommandEnd)?;
    parser.expect(TokenKind::CommandEnd)?;

    let increment = parse_checked_clause(parser, NodeKind::Increment, TokenKind::RightParen)?;
    parser.expect(TokenKind::RightParen)?;
    parser.expect(TokenKind::StartStatement)?;

    let body = parse_block(parser)?;

    let mut for_loop = Node::new(NodeKind::ForLoop);
    for_loop.add_child(initializer);
    for_loop.add_child(condition);
    for_loop.add_child(increment);
    for_loop.add_child(body);

    Ok(for_loop)
}

/// Flattens tokens up to `terminator` into one text run, rejecting
/// identifiers that resolve in no active scope.
fn parse_checked_clause(
    parser: &mut Parser,
    kind: NodeKind,
    terminator: TokenKind,
) -> Result<Node, Error> {
    let mut parts = Vec::new();

    while let Some(token) = parser.current_token() {
        if token.kind == terminator {
            break;
        }
        if token.kind == TokenKind::Identifier {
            parser.check_defined(token)?;
        }

        parts.push(token.value.clone());
        parser.advance();
    }

    Ok(Node::with_text(kind, parts.join(" ").trim()))
}

/// Flattens tokens into an `Expression` node until a statement terminator,
/// which is left in place. Identifiers are not checked here.
pub fn parse_expression(parser: &mut Parser) -> Node {
    let mut parts = Vec::new();

    while let Some(token) = parser.current_token() {
        if token.kind.is_expression_terminator() {
            break;
        }

        parts.push(token.value.clone());
        parser.advance();
    }

    Node::with_text(NodeKind::Expression, parts.join(" ").trim())
}

pub fn parse_generic_statement(parser: &mut Parser) -> Result<Node, Error> {
    if parser.current_token_kind() == Some(TokenKind::Return) {
        parser.expect(TokenKind::Return)?;
        let value = parser.expect(TokenKind::Identifier)?;
        parser.check_defined(&value)?;
        parser.expect(TokenKind::CommandEnd)?;

        return Ok(Node::with_text(NodeKind::Return, value.value));
    }

    match parser.advance() {
        Some(token) => Ok(Node::with_text(NodeKind::Statement, token.value)),
        None => Err(Error::new(
            ErrorImpl::UnexpectedEndOfInput {
                expected: String::from("statement"),
            },
            parser.get_position(),
        )),
    }
}
