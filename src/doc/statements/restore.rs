/*!
# `RESTORE [<line number>]`

## Purpose
Moves the `READ` position.

## Remarks
The next `READ` takes the first item on or after `<line number>`,
or from the start of the program.

## Example
```text
10 READ A
20 RESTORE
30 READ B
40 PRINT A;B
50 DATA 7
RUN
77
0/50
```

*/
